//! WebAssembly bindings for the ColorCraft salon studio
//!
//! Exposes the in-memory core to the browser UI:
//! - a `SalonApp` handle owning the record store
//! - pure calculator helpers usable without a store
//!
//! Collections and inputs cross the boundary as JSON strings; mutation
//! failures surface as `JsValue` errors with human-readable messages for
//! the UI to show as notifications.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use colorcraft_core::{AppError, RecordStore};
use shared::models::{AppSettings, ColorUsage, InventoryItemUpdate, NewFormula, NewInventoryItem};
use shared::types::StockStatus;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"ColorCraft core initialized".into());
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid JSON: {e}")))
}

fn parse_id(id: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(id).map_err(|e| JsValue::from_str(&format!("Invalid id '{id}': {e}")))
}

fn app_error(e: AppError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// Pure calculators
// ============================================================================

/// Cost per ounce for a unit price and size; zero when the size is invalid
#[wasm_bindgen]
pub fn calculate_cost_per_ounce(price: f64, ounces_per_unit: f64) -> f64 {
    if ounces_per_unit <= 0.0 {
        return 0.0;
    }
    price / ounces_per_unit
}

/// Total cost of a formula from its color usage entries (JSON array)
#[wasm_bindgen]
pub fn calculate_formula_total(colors_json: &str) -> Result<f64, JsValue> {
    let colors: Vec<ColorUsage> = from_json(colors_json)?;
    let total: Decimal = colors.iter().map(ColorUsage::line_cost).sum();
    Ok(total.to_f64().unwrap_or(0.0))
}

/// Display label for an item's stock level
#[wasm_bindgen]
pub fn stock_status_label(stock_quantity: u32, low_stock_threshold: u32) -> String {
    let status = if stock_quantity == 0 {
        StockStatus::OutOfStock
    } else if stock_quantity <= low_stock_threshold {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    };
    status.to_string()
}

// ============================================================================
// Stateful application handle
// ============================================================================

/// The application core, owned by the page for its lifetime
#[wasm_bindgen]
pub struct SalonApp {
    store: RecordStore,
}

#[wasm_bindgen]
impl SalonApp {
    /// A store seeded with the mock data the app boots with
    #[wasm_bindgen(constructor)]
    pub fn new() -> SalonApp {
        SalonApp {
            store: RecordStore::seeded(),
        }
    }

    /// An empty store, mainly for tests and fresh installs
    pub fn empty() -> SalonApp {
        SalonApp {
            store: RecordStore::new(),
        }
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn inventory(&self) -> Result<String, JsValue> {
        to_json(&self.store.inventory())
    }

    pub fn brands(&self) -> Result<String, JsValue> {
        to_json(&self.store.brands())
    }

    pub fn formulas(&self) -> Result<String, JsValue> {
        to_json(&self.store.formulas())
    }

    pub fn client_summaries(&self) -> Result<String, JsValue> {
        to_json(&self.store.client_summaries())
    }

    pub fn brand_summaries(&self) -> Result<String, JsValue> {
        to_json(&self.store.brand_summaries())
    }

    pub fn dashboard_metrics(&self) -> Result<String, JsValue> {
        to_json(&self.store.dashboard_metrics())
    }

    /// Clients matching a search term (name or formula notes)
    pub fn filtered_clients(&self, search_term: &str) -> Result<String, JsValue> {
        to_json(&self.store.filtered_clients(search_term))
    }

    /// Visible items of one brand whose shade matches a search term
    pub fn brand_items(&self, brand: &str, search_term: &str) -> Result<String, JsValue> {
        to_json(&self.store.brand_items(brand, search_term))
    }

    pub fn settings(&self) -> Result<String, JsValue> {
        to_json(self.store.settings())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add an inventory item from a `NewInventoryItem` JSON payload;
    /// returns the created item as JSON
    pub fn add_inventory_item(&mut self, input_json: &str) -> Result<String, JsValue> {
        let input: NewInventoryItem = from_json(input_json)?;
        let item = self.store.add_inventory_item(input).map_err(app_error)?;
        to_json(&item)
    }

    /// Apply an `InventoryItemUpdate` JSON payload to an item
    pub fn update_inventory_item(&mut self, id: &str, update_json: &str) -> Result<String, JsValue> {
        let id = parse_id(id)?;
        let update: InventoryItemUpdate = from_json(update_json)?;
        let item = self
            .store
            .update_inventory_item(id, update)
            .map_err(app_error)?;
        to_json(&item)
    }

    pub fn delete_inventory_item(&mut self, id: &str) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        self.store.delete_inventory_item(id).map_err(app_error)?;
        Ok(())
    }

    /// Returns whether the row is hidden after the toggle
    pub fn toggle_item_visibility(&mut self, id: &str) -> Result<bool, JsValue> {
        let id = parse_id(id)?;
        self.store.toggle_item_visibility(id).map_err(app_error)
    }

    pub fn add_brand(&mut self, name: &str) -> Result<String, JsValue> {
        self.store.add_brand(name).map_err(app_error)
    }

    pub fn delete_brand(&mut self, name: &str) -> Result<(), JsValue> {
        self.store.delete_brand(name).map_err(app_error)
    }

    /// Save a formula from a `NewFormula` JSON payload; returns the created
    /// record as JSON
    pub fn add_formula(&mut self, input_json: &str) -> Result<String, JsValue> {
        let input: NewFormula = from_json(input_json)?;
        let record = self.store.add_formula(input).map_err(app_error)?;
        to_json(&record)
    }

    pub fn delete_formula(&mut self, id: &str) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        self.store.delete_formula(id).map_err(app_error)?;
        Ok(())
    }

    /// Replace the settings with an `AppSettings` JSON payload
    pub fn update_settings(&mut self, settings_json: &str) -> Result<(), JsValue> {
        let settings: AppSettings = from_json(settings_json)?;
        self.store.update_settings(settings);
        Ok(())
    }
}

impl Default for SalonApp {
    fn default() -> Self {
        Self::new()
    }
}
