//! The canonical in-memory record store
//!
//! Owns the flat inventory, brand, and formula collections plus the hidden
//! row set and the settings structure. Every mutation validates its input
//! fully before touching state, so a rejected operation leaves the store
//! exactly as it was.

use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashSet;
use uuid::Uuid;

use shared::models::{
    AppSettings, BrandSummary, ClientSelector, ClientSummary, FormulaRecord, InventoryItem,
    InventoryItemUpdate, NewFormula, NewInventoryItem,
};
use shared::validation;

use crate::error::{AppError, AppResult};
use crate::seed;
use crate::summary::{self, DashboardMetrics};

/// In-memory store for the salon's records.
///
/// Constructed at application start and passed explicitly to whoever needs
/// it; there is no ambient singleton.
#[derive(Debug, Clone)]
pub struct RecordStore {
    inventory: Vec<InventoryItem>,
    formulas: Vec<FormulaRecord>,
    brands: Vec<String>,
    hidden_items: HashSet<Uuid>,
    settings: AppSettings,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// An empty store with default settings
    pub fn new() -> Self {
        Self {
            inventory: Vec::new(),
            formulas: Vec::new(),
            brands: Vec::new(),
            hidden_items: HashSet::new(),
            settings: AppSettings::default(),
        }
    }

    /// A store populated with the mock data the application boots with
    pub fn seeded() -> Self {
        let data = seed::seed_data();
        tracing::info!(
            items = data.inventory.len(),
            brands = data.brands.len(),
            formulas = data.formulas.len(),
            "seeding record store"
        );
        Self {
            inventory: data.inventory,
            formulas: data.formulas,
            brands: data.brands,
            hidden_items: HashSet::new(),
            settings: AppSettings::default(),
        }
    }

    /// Discard all records and restore the seeded state
    pub fn reset(&mut self) {
        tracing::info!("resetting record store to seed data");
        *self = Self::seeded();
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn formulas(&self) -> &[FormulaRecord] {
        &self.formulas
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn hidden_items(&self) -> &HashSet<Uuid> {
        &self.hidden_items
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn get_inventory_item(&self, id: Uuid) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id == id)
    }

    pub fn get_formula(&self, id: Uuid) -> Option<&FormulaRecord> {
        self.formulas.iter().find(|formula| formula.id == id)
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    pub fn client_summaries(&self) -> Vec<ClientSummary> {
        summary::summarize_clients(&self.formulas)
    }

    pub fn brand_summaries(&self) -> Vec<BrandSummary> {
        summary::summarize_brands(&self.brands, &self.inventory)
    }

    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        summary::dashboard_metrics(&self.inventory, &self.formulas)
    }

    /// Client summaries matching a search term (name or formula notes)
    pub fn filtered_clients(&self, search_term: &str) -> Vec<ClientSummary> {
        summary::filter_clients(&self.client_summaries(), search_term)
    }

    /// Visible items of one brand whose shade matches a search term
    pub fn brand_items(&self, brand: &str, search_term: &str) -> Vec<InventoryItem> {
        summary::filter_brand_items(&self.inventory, brand, &self.hidden_items, search_term)
    }

    // ========================================================================
    // Inventory mutations
    // ========================================================================

    pub fn add_inventory_item(&mut self, input: NewInventoryItem) -> AppResult<InventoryItem> {
        validation::validate_shade(&input.shade)
            .map_err(|msg| AppError::validation("shade", msg))?;
        validation::validate_ounces_per_unit(input.ounces_per_unit)
            .map_err(|msg| AppError::validation("ounces_per_unit", msg))?;
        validation::validate_price(input.price)
            .map_err(|msg| AppError::validation("price", msg))?;
        let brand = self
            .registered_brand(&input.brand)
            .ok_or_else(|| AppError::validation("brand", "Brand is not registered"))?;

        let now = Utc::now();
        let item = InventoryItem {
            id: Uuid::new_v4(),
            shade: input.shade.trim().to_string(),
            brand,
            ounces_per_unit: input.ounces_per_unit,
            price: input.price,
            cost_per_ounce: input.price / input.ounces_per_unit,
            stock_quantity: input.stock_quantity,
            low_stock_threshold: input.low_stock_threshold,
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(id = %item.id, shade = %item.shade, "adding inventory item");
        self.inventory.push(item.clone());
        Ok(item)
    }

    pub fn update_inventory_item(
        &mut self,
        id: Uuid,
        update: InventoryItemUpdate,
    ) -> AppResult<InventoryItem> {
        let index = self
            .inventory
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("inventory item {id}")))?;

        let mut candidate = self.inventory[index].clone();
        if let Some(shade) = update.shade {
            candidate.shade = shade.trim().to_string();
        }
        let pricing_changed = update.price.is_some() || update.ounces_per_unit.is_some();
        if let Some(ounces) = update.ounces_per_unit {
            candidate.ounces_per_unit = ounces;
        }
        if let Some(price) = update.price {
            candidate.price = price;
        }
        if let Some(quantity) = update.stock_quantity {
            candidate.stock_quantity = quantity;
        }
        if let Some(threshold) = update.low_stock_threshold {
            candidate.low_stock_threshold = threshold;
        }

        validation::validate_shade(&candidate.shade)
            .map_err(|msg| AppError::validation("shade", msg))?;
        validation::validate_ounces_per_unit(candidate.ounces_per_unit)
            .map_err(|msg| AppError::validation("ounces_per_unit", msg))?;
        validation::validate_price(candidate.price)
            .map_err(|msg| AppError::validation("price", msg))?;

        if pricing_changed {
            candidate.cost_per_ounce = candidate.price / candidate.ounces_per_unit;
        }
        candidate.updated_at = Utc::now();

        tracing::debug!(id = %id, "updating inventory item");
        self.inventory[index] = candidate.clone();
        Ok(candidate)
    }

    pub fn delete_inventory_item(&mut self, id: Uuid) -> AppResult<InventoryItem> {
        let index = self
            .inventory
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("inventory item {id}")))?;

        tracing::debug!(id = %id, "deleting inventory item");
        self.hidden_items.remove(&id);
        Ok(self.inventory.remove(index))
    }

    /// Flip a row in or out of the hidden set; returns whether it is hidden now
    pub fn toggle_item_visibility(&mut self, id: Uuid) -> AppResult<bool> {
        if self.get_inventory_item(id).is_none() {
            return Err(AppError::not_found(format!("inventory item {id}")));
        }
        if self.hidden_items.remove(&id) {
            Ok(false)
        } else {
            self.hidden_items.insert(id);
            Ok(true)
        }
    }

    // ========================================================================
    // Brand registry
    // ========================================================================

    pub fn add_brand(&mut self, name: &str) -> AppResult<String> {
        validation::validate_brand_name(name)
            .map_err(|msg| AppError::validation("brand", msg))?;
        let trimmed = name.trim().to_string();
        if self.registered_brand(&trimmed).is_some() {
            return Err(AppError::validation("brand", "Brand already exists"));
        }

        tracing::debug!(brand = %trimmed, "adding brand");
        self.brands.push(trimmed.clone());
        Ok(trimmed)
    }

    pub fn delete_brand(&mut self, name: &str) -> AppResult<()> {
        let key = validation::brand_key(name);
        let index = self
            .brands
            .iter()
            .position(|brand| validation::brand_key(brand) == key)
            .ok_or_else(|| AppError::not_found(format!("brand {}", name.trim())))?;

        let canonical = self.brands[index].clone();
        let in_use = self
            .inventory
            .iter()
            .filter(|item| item.brand == canonical)
            .count();
        if in_use > 0 {
            return Err(AppError::conflict(format!(
                "{in_use} inventory item(s) still reference brand '{canonical}'"
            )));
        }

        tracing::debug!(brand = %canonical, "deleting brand");
        self.brands.remove(index);
        Ok(())
    }

    /// Canonical registry spelling for a name, matched case-insensitively
    fn registered_brand(&self, name: &str) -> Option<String> {
        let key = validation::brand_key(name);
        self.brands
            .iter()
            .find(|brand| validation::brand_key(brand) == key)
            .cloned()
    }

    // ========================================================================
    // Formula mutations
    // ========================================================================

    pub fn add_formula(&mut self, input: NewFormula) -> AppResult<FormulaRecord> {
        validation::validate_client_name(&input.client_name)
            .map_err(|msg| AppError::validation("client_name", msg))?;
        validation::validate_color_usages(&input.colors_used)
            .map_err(|msg| AppError::validation("colors_used", msg))?;

        let client_name = input.client_name.trim().to_string();
        let client_id = match input.client {
            ClientSelector::NewClient => Uuid::new_v4(),
            ClientSelector::Existing => {
                match self
                    .client_summaries()
                    .iter()
                    .find(|client| client.name == client_name)
                {
                    Some(client) => client.id,
                    // No current client has that name; mint a fresh id, the
                    // same way the app behaves when the typed name matches
                    // nobody.
                    None => {
                        tracing::debug!(name = %client_name, "no existing client matched, minting fresh id");
                        Uuid::new_v4()
                    }
                }
            }
        };

        // Frozen at save time; later inventory price edits do not touch it.
        let total_cost: Decimal = input.colors_used.iter().map(|c| c.line_cost()).sum();

        let record = FormulaRecord {
            id: Uuid::new_v4(),
            client_id,
            client_name,
            date: input.date,
            notes: input.notes,
            before_image: input.before_image,
            after_image: input.after_image,
            colors_used: input.colors_used,
            total_cost,
            created_at: Utc::now(),
        };

        tracing::debug!(id = %record.id, client = %record.client_name, "adding formula");
        // Newest first, matching how the app lists them.
        self.formulas.insert(0, record.clone());
        Ok(record)
    }

    pub fn delete_formula(&mut self, id: Uuid) -> AppResult<FormulaRecord> {
        let index = self
            .formulas
            .iter()
            .position(|formula| formula.id == id)
            .ok_or_else(|| AppError::not_found(format!("formula {id}")))?;

        tracing::debug!(id = %id, "deleting formula");
        Ok(self.formulas.remove(index))
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn update_settings(&mut self, settings: AppSettings) {
        tracing::debug!("updating settings");
        self.settings = settings;
    }
}
