//! Domain models for the ColorCraft salon studio

mod client;
mod formula;
mod inventory;
mod settings;

pub use client::*;
pub use formula::*;
pub use inventory::*;
pub use settings::*;
