//! Application settings
//!
//! Every recognized option is listed explicitly; there is no open-ended
//! key/value map. Updates replace the whole structure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// UI theme selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Automatic backup cadence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

/// All user-adjustable settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    // Appearance
    pub theme: Theme,
    pub compact_mode: bool,

    // Notifications
    pub low_stock_alerts: bool,
    pub email_notifications: bool,

    // Inventory
    pub default_low_stock_threshold: u32,
    pub auto_calculate_cost: bool,

    // Business
    pub business_name: String,
    pub tax_rate: Decimal,
    pub currency: String,

    // Data
    pub backup_frequency: BackupFrequency,
    pub data_retention_days: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            compact_mode: false,
            low_stock_alerts: true,
            email_notifications: false,
            default_low_stock_threshold: 10,
            auto_calculate_cost: true,
            business_name: "ColorCraft Studio".to_string(),
            // 8.5%
            tax_rate: Decimal::new(85, 1),
            currency: "USD".to_string(),
            backup_frequency: BackupFrequency::Weekly,
            data_retention_days: 365,
        }
    }
}
