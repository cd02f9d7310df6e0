//! ColorCraft salon studio - in-memory core
//!
//! Holds the canonical inventory, brand, and formula collections and derives
//! the client and brand views the presentation layer renders. All state is
//! in-memory and seeded from mock data; there is no persistence and no
//! network. The store is an explicit, injectable object - construct it at
//! application start and pass it where it is needed.

pub mod error;
pub mod seed;
pub mod store;
pub mod summary;

pub use error::{AppError, AppResult};
pub use store::RecordStore;
