//! Client color formula models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::InventoryItem;
use crate::types::ImageData;

/// One color used in a formula.
///
/// Shade, brand, and cost are a snapshot taken when the color is added to
/// the formula; later edits to the inventory item do not flow back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorUsage {
    pub color_id: Uuid,
    pub shade: String,
    pub brand: String,
    pub cost_per_ounce: Decimal,
    /// Ounces used in this application
    pub amount_used: Decimal,
}

impl ColorUsage {
    /// Snapshot an inventory item into a usage entry
    pub fn from_item(item: &InventoryItem, amount_used: Decimal) -> Self {
        Self {
            color_id: item.id,
            shade: item.shade.clone(),
            brand: item.brand.clone(),
            cost_per_ounce: item.cost_per_ounce,
            amount_used,
        }
    }

    pub fn line_cost(&self) -> Decimal {
        self.amount_used * self.cost_per_ounce
    }
}

/// A recorded color application for one client appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_name: String,
    /// Appointment date
    pub date: DateTime<Utc>,
    pub notes: String,
    pub before_image: Option<ImageData>,
    pub after_image: Option<ImageData>,
    /// Entry order is preserved; at least one entry
    pub colors_used: Vec<ColorUsage>,
    /// Derived at save time from colors_used; frozen thereafter
    pub total_cost: Decimal,
    pub created_at: DateTime<Utc>,
}

/// How the client for a new formula is chosen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClientSelector {
    /// Mint a fresh client id
    NewClient,
    /// Match an existing client by name; falls back to a fresh id when the
    /// name matches no current client
    Existing,
}

/// Input for saving a formula
#[derive(Debug, Clone, Deserialize)]
pub struct NewFormula {
    pub client_name: String,
    pub client: ClientSelector,
    pub date: DateTime<Utc>,
    pub notes: String,
    pub before_image: Option<ImageData>,
    pub after_image: Option<ImageData>,
    pub colors_used: Vec<ColorUsage>,
}
