//! Common types used across the application

use serde::{Deserialize, Serialize};

/// Stock level classification for a single inventory item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "In Stock"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

/// Health classification for a whole brand's stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BrandStatus {
    Good,
    Warning,
    Critical,
}

impl std::fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandStatus::Good => write!(f, "Good"),
            BrandStatus::Warning => write!(f, "Warning"),
            BrandStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Embedded image attachment (data URL produced by the file picker)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageData {
    /// Base64 data URL, e.g. "data:image/png;base64,..."
    pub data_url: String,
    pub original_filename: Option<String>,
}
