//! Derived views over the flat record collections
//!
//! Everything here is a pure function of its inputs. The presentation layer
//! recomputes these on every render, so no hidden state is allowed and a
//! mutation elsewhere can never leave a summary stale.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use shared::models::{BrandSummary, ClientSummary, FormulaRecord, InventoryItem};
use shared::types::BrandStatus;

/// Group formulas into per-client summaries.
///
/// Clients are ordered by last visit, newest first; each client's formulas
/// are ordered by appointment date, newest first. Both sorts are stable, so
/// ties keep the relative order of the input collection (for clients, the
/// order in which each client first appears).
pub fn summarize_clients(formulas: &[FormulaRecord]) -> Vec<ClientSummary> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut groups: HashMap<Uuid, ClientSummary> = HashMap::new();

    for formula in formulas {
        let group = groups.entry(formula.client_id).or_insert_with(|| {
            order.push(formula.client_id);
            ClientSummary {
                id: formula.client_id,
                name: formula.client_name.clone(),
                formulas: Vec::new(),
                last_visit: formula.date,
                total_spent: Decimal::ZERO,
            }
        });
        group.formulas.push(formula.clone());
        group.total_spent += formula.total_cost;
        if formula.date > group.last_visit {
            group.last_visit = formula.date;
        }
    }

    let mut clients: Vec<ClientSummary> = order
        .into_iter()
        .filter_map(|id| groups.remove(&id))
        .collect();

    for client in &mut clients {
        client.formulas.sort_by(|a, b| b.date.cmp(&a.date));
    }
    clients.sort_by(|a, b| b.last_visit.cmp(&a.last_visit));

    clients
}

/// Roll up inventory per registered brand, alphabetically.
///
/// Every registry entry gets a summary, including brands without items.
pub fn summarize_brands(brands: &[String], items: &[InventoryItem]) -> Vec<BrandSummary> {
    let mut summaries: Vec<BrandSummary> = brands
        .iter()
        .map(|brand| {
            let mut total_stock = 0u32;
            let mut total_value = Decimal::ZERO;
            let mut low_stock_count = 0u32;
            let mut out_of_stock = false;

            for item in items.iter().filter(|item| &item.brand == brand) {
                total_stock += item.stock_quantity;
                total_value += item.stock_value();
                if item.stock_quantity <= item.low_stock_threshold {
                    low_stock_count += 1;
                }
                if item.stock_quantity == 0 {
                    out_of_stock = true;
                }
            }

            let status = if out_of_stock {
                BrandStatus::Critical
            } else if low_stock_count > 0 {
                BrandStatus::Warning
            } else {
                BrandStatus::Good
            };

            BrandSummary {
                brand: brand.clone(),
                total_stock,
                total_value,
                low_stock_count,
                status,
            }
        })
        .collect();

    summaries.sort_by(|a, b| a.brand.cmp(&b.brand));
    summaries
}

/// Keep clients whose name or any formula's notes contain the search term,
/// case-insensitively. An empty term matches everything.
pub fn filter_clients(clients: &[ClientSummary], search_term: &str) -> Vec<ClientSummary> {
    let term = search_term.to_lowercase();
    clients
        .iter()
        .filter(|client| {
            client.name.to_lowercase().contains(&term)
                || client
                    .formulas
                    .iter()
                    .any(|formula| formula.notes.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Items of one brand, minus hidden rows, shade-matched case-insensitively
pub fn filter_brand_items(
    items: &[InventoryItem],
    brand: &str,
    hidden_ids: &HashSet<Uuid>,
    search_term: &str,
) -> Vec<InventoryItem> {
    let term = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| item.brand == brand)
        .filter(|item| !hidden_ids.contains(&item.id))
        .filter(|item| item.shade.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub total_inventory_value: Decimal,
    /// Items at or below their threshold, out-of-stock included
    pub low_stock_items: u32,
    pub total_formulas: u32,
    pub unique_clients: u32,
    pub average_formula_cost: Decimal,
}

pub fn dashboard_metrics(
    items: &[InventoryItem],
    formulas: &[FormulaRecord],
) -> DashboardMetrics {
    let total_inventory_value = items.iter().map(InventoryItem::stock_value).sum();
    let low_stock_items = items
        .iter()
        .filter(|item| item.stock_quantity <= item.low_stock_threshold)
        .count() as u32;

    let total_cost: Decimal = formulas.iter().map(|f| f.total_cost).sum();
    let average_formula_cost = if formulas.is_empty() {
        Decimal::ZERO
    } else {
        total_cost / Decimal::from(formulas.len() as u64)
    };

    let unique_clients: HashSet<Uuid> = formulas.iter().map(|f| f.client_id).collect();

    DashboardMetrics {
        total_inventory_value,
        low_stock_items,
        total_formulas: formulas.len() as u32,
        unique_clients: unique_clients.len() as u32,
        average_formula_cost,
    }
}
