//! Shared types and models for the ColorCraft salon studio
//!
//! This crate contains types shared between the in-memory core, the
//! WASM bindings, and other components of the application.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
