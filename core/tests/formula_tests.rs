//! Formula record tests
//!
//! Covers:
//! - Frozen total-cost snapshots
//! - Color usage validation
//! - Client id resolution for new and existing clients

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use colorcraft_core::{AppError, RecordStore};
use shared::models::{
    ClientSelector, ColorUsage, InventoryItemUpdate, NewFormula, NewInventoryItem,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn usage(shade: &str, cost: &str, amount: &str) -> ColorUsage {
    ColorUsage {
        color_id: Uuid::new_v4(),
        shade: shade.to_string(),
        brand: "Wella".to_string(),
        cost_per_ounce: dec(cost),
        amount_used: dec(amount),
    }
}

fn new_formula(client_name: &str, client: ClientSelector, colors: Vec<ColorUsage>) -> NewFormula {
    NewFormula {
        client_name: client_name.to_string(),
        client,
        date: Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap(),
        notes: String::new(),
        before_image: None,
        after_image: None,
        colors_used: colors,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn total_cost_is_sum_of_line_costs() {
        let mut store = RecordStore::new();
        let record = store
            .add_formula(new_formula(
                "Sarah Johnson",
                ClientSelector::NewClient,
                vec![
                    usage("Platinum Blonde 10A", "7.75", "3.5"),
                    usage("Toner T18", "6.50", "1.0"),
                ],
            ))
            .unwrap();

        // 3.5 * 7.75 + 1.0 * 6.50; full precision kept, rounding is display-only
        assert_eq!(record.total_cost, dec("33.625"));
    }

    #[test]
    fn total_cost_is_frozen_against_later_price_edits() {
        let mut store = RecordStore::new();
        store.add_brand("Wella").unwrap();
        let item = store
            .add_inventory_item(NewInventoryItem {
                shade: "Copper Red 6R".to_string(),
                brand: "Wella".to_string(),
                ounces_per_unit: dec("2"),
                price: dec("16"),
                stock_quantity: 8,
                low_stock_threshold: 15,
            })
            .unwrap();

        let snapshot = ColorUsage::from_item(&item, dec("2"));
        let record = store
            .add_formula(new_formula(
                "Emily Davis",
                ClientSelector::NewClient,
                vec![snapshot],
            ))
            .unwrap();
        assert_eq!(record.total_cost, dec("16"));

        // Doubling the price afterwards must not touch the saved record
        store
            .update_inventory_item(
                item.id,
                InventoryItemUpdate {
                    price: Some(dec("32")),
                    ..Default::default()
                },
            )
            .unwrap();

        let stored = store.get_formula(record.id).unwrap();
        assert_eq!(stored.total_cost, dec("16"));
        assert_eq!(stored.colors_used[0].cost_per_ounce, dec("8"));
    }

    #[test]
    fn color_list_is_validated() {
        let mut store = RecordStore::new();

        let err = store
            .add_formula(new_formula("Sarah", ClientSelector::NewClient, vec![]))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "colors_used"));

        let err = store
            .add_formula(new_formula(
                "Sarah",
                ClientSelector::NewClient,
                vec![usage("Toner T18", "6.50", "0")],
            ))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let duplicated = usage("Toner T18", "6.50", "1.0");
        let err = store
            .add_formula(new_formula(
                "Sarah",
                ClientSelector::NewClient,
                vec![duplicated.clone(), duplicated],
            ))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let err = store
            .add_formula(new_formula(
                "   ",
                ClientSelector::NewClient,
                vec![usage("Toner T18", "6.50", "1.0")],
            ))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "client_name"));

        assert!(store.formulas().is_empty());
    }

    #[test]
    fn two_new_client_submissions_with_same_name_get_distinct_ids() {
        let mut store = RecordStore::new();
        let first = store
            .add_formula(new_formula(
                "Sarah Johnson",
                ClientSelector::NewClient,
                vec![usage("A", "7.75", "1")],
            ))
            .unwrap();
        let second = store
            .add_formula(new_formula(
                "Sarah Johnson",
                ClientSelector::NewClient,
                vec![usage("B", "7.75", "1")],
            ))
            .unwrap();

        assert_ne!(first.client_id, second.client_id);
        assert_eq!(store.client_summaries().len(), 2);
    }

    #[test]
    fn existing_client_is_matched_by_name() {
        let mut store = RecordStore::new();
        let first = store
            .add_formula(new_formula(
                "Sarah Johnson",
                ClientSelector::NewClient,
                vec![usage("A", "7.75", "1")],
            ))
            .unwrap();
        let second = store
            .add_formula(new_formula(
                "Sarah Johnson",
                ClientSelector::Existing,
                vec![usage("B", "7.75", "1")],
            ))
            .unwrap();

        assert_eq!(first.client_id, second.client_id);
        assert_eq!(store.client_summaries().len(), 1);
    }

    #[test]
    fn existing_client_with_unmatched_name_gets_fresh_id() {
        let mut store = RecordStore::new();
        let first = store
            .add_formula(new_formula(
                "Sarah Johnson",
                ClientSelector::NewClient,
                vec![usage("A", "7.75", "1")],
            ))
            .unwrap();
        let second = store
            .add_formula(new_formula(
                "Maria Garcia",
                ClientSelector::Existing,
                vec![usage("B", "7.75", "1")],
            ))
            .unwrap();

        assert_ne!(first.client_id, second.client_id);
    }

    #[test]
    fn newest_formula_is_listed_first() {
        let mut store = RecordStore::new();
        let first = store
            .add_formula(new_formula(
                "Sarah",
                ClientSelector::NewClient,
                vec![usage("A", "7.75", "1")],
            ))
            .unwrap();
        let second = store
            .add_formula(new_formula(
                "Emily",
                ClientSelector::NewClient,
                vec![usage("B", "7.75", "1")],
            ))
            .unwrap();

        assert_eq!(store.formulas()[0].id, second.id);
        assert_eq!(store.formulas()[1].id, first.id);
    }

    #[test]
    fn delete_formula() {
        let mut store = RecordStore::new();
        let record = store
            .add_formula(new_formula(
                "Sarah",
                ClientSelector::NewClient,
                vec![usage("A", "7.75", "1")],
            ))
            .unwrap();

        store.delete_formula(record.id).unwrap();
        assert!(store.formulas().is_empty());

        let err = store.delete_formula(record.id).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// total_cost equals the sum over colors of amount * cost at save time
    #[test]
    fn prop_total_cost_matches_entries(
        entries in proptest::collection::vec((1u32..10_000, 1u32..500), 1..10)
    ) {
        let colors: Vec<ColorUsage> = entries
            .iter()
            .map(|(cost_cents, amount_tenths)| ColorUsage {
                color_id: Uuid::new_v4(),
                shade: "Shade".to_string(),
                brand: "Wella".to_string(),
                cost_per_ounce: Decimal::new(*cost_cents as i64, 2),
                amount_used: Decimal::new(*amount_tenths as i64, 1),
            })
            .collect();

        let expected: Decimal = colors.iter().map(|c| c.amount_used * c.cost_per_ounce).sum();

        let mut store = RecordStore::new();
        let record = store
            .add_formula(new_formula("Client", ClientSelector::NewClient, colors))
            .unwrap();

        prop_assert_eq!(record.total_cost, expected);
    }
}
