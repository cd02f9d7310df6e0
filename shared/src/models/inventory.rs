//! Color inventory models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{BrandStatus, StockStatus};

/// A color product tracked in inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    /// Display name of the shade (e.g., "Platinum Blonde 10A")
    pub shade: String,
    /// Brand name; must match an entry in the brand registry
    pub brand: String,
    pub ounces_per_unit: Decimal,
    /// Price per purchased unit
    pub price: Decimal,
    /// Derived: price / ounces_per_unit. Never edited directly.
    pub cost_per_ounce: Decimal,
    pub stock_quantity: u32,
    pub low_stock_threshold: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn stock_status(&self) -> StockStatus {
        if self.stock_quantity == 0 {
            StockStatus::OutOfStock
        } else if self.stock_quantity <= self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Total ounces on hand across all units
    pub fn total_ounces(&self) -> Decimal {
        self.ounces_per_unit * Decimal::from(self.stock_quantity)
    }

    /// Purchase value of the stock on hand
    pub fn stock_value(&self) -> Decimal {
        self.price * Decimal::from(self.stock_quantity)
    }
}

/// Input for creating an inventory item
#[derive(Debug, Clone, Deserialize)]
pub struct NewInventoryItem {
    pub shade: String,
    pub brand: String,
    pub ounces_per_unit: Decimal,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub low_stock_threshold: u32,
}

/// Partial update for an inventory item; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryItemUpdate {
    pub shade: Option<String>,
    pub ounces_per_unit: Option<Decimal>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<u32>,
    pub low_stock_threshold: Option<u32>,
}

/// Derived per-brand stock rollup. Never stored; recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandSummary {
    pub brand: String,
    pub total_stock: u32,
    pub total_value: Decimal,
    /// Items at or below their threshold, out-of-stock included
    pub low_stock_count: u32,
    pub status: BrandStatus,
}
