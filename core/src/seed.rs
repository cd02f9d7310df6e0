//! Hard-coded mock data the application boots with

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{ColorUsage, FormulaRecord, InventoryItem};

/// The seeded collections, built fresh on every call
#[derive(Debug, Clone)]
pub struct SeedData {
    pub brands: Vec<String>,
    pub inventory: Vec<InventoryItem>,
    pub formulas: Vec<FormulaRecord>,
}

pub fn seed_data() -> SeedData {
    let brands: Vec<String> = ["L'Oréal", "Wella", "Redken", "Matrix", "Schwarzkopf"]
        .into_iter()
        .map(String::from)
        .collect();

    let inventory = vec![
        item("Platinum Blonde 10A", "L'Oréal", Decimal::from(2), Decimal::new(1550, 2), 45, 10),
        item("Copper Red 6R", "Wella", Decimal::new(21, 1), Decimal::new(1825, 2), 8, 15),
        item("Ash Brown 4A", "Redken", Decimal::from(2), Decimal::new(1675, 2), 32, 10),
        item("Golden Brown 5G", "L'Oréal", Decimal::from(2), Decimal::new(1550, 2), 0, 10),
        item("Medium Blonde 7N", "Wella", Decimal::new(21, 1), Decimal::new(1700, 2), 25, 15),
    ];

    let sarah = Uuid::new_v4();
    let emily = Uuid::new_v4();

    // Newest first, the order the app lists them in. Two of the snapshot
    // entries (the toner and the developer) point at colors that are no
    // longer in inventory; the snapshots keep them usable regardless.
    let formulas = vec![
        formula(
            sarah,
            "Sarah Johnson",
            date(2024, 1, 15),
            "Full head highlights with toner. Client wanted platinum blonde look.",
            vec![
                usage(inventory[0].id, "Platinum Blonde 10A", "L'Oréal", Decimal::new(775, 2), Decimal::new(35, 1)),
                usage(Uuid::new_v4(), "Toner T18", "Wella", Decimal::new(650, 2), Decimal::from(1)),
            ],
        ),
        formula(
            emily,
            "Emily Davis",
            date(2024, 1, 14),
            "Root touch-up and color refresh. Added copper tones.",
            vec![
                usage(inventory[1].id, "Copper Red 6R", "Wella", Decimal::new(869, 2), Decimal::from(2)),
                usage(Uuid::new_v4(), "Developer 30", "Generic", Decimal::new(325, 2), Decimal::from(2)),
            ],
        ),
        formula(
            sarah,
            "Sarah Johnson",
            date(2024, 1, 10),
            "Initial consultation and color test. Preparing for full highlights.",
            vec![usage(
                inventory[0].id,
                "Platinum Blonde 10A",
                "L'Oréal",
                Decimal::new(775, 2),
                Decimal::new(5, 1),
            )],
        ),
    ];

    SeedData {
        brands,
        inventory,
        formulas,
    }
}

fn item(
    shade: &str,
    brand: &str,
    ounces_per_unit: Decimal,
    price: Decimal,
    stock_quantity: u32,
    low_stock_threshold: u32,
) -> InventoryItem {
    let now = Utc::now();
    InventoryItem {
        id: Uuid::new_v4(),
        shade: shade.to_string(),
        brand: brand.to_string(),
        ounces_per_unit,
        price,
        cost_per_ounce: price / ounces_per_unit,
        stock_quantity,
        low_stock_threshold,
        created_at: now,
        updated_at: now,
    }
}

fn usage(
    color_id: Uuid,
    shade: &str,
    brand: &str,
    cost_per_ounce: Decimal,
    amount_used: Decimal,
) -> ColorUsage {
    ColorUsage {
        color_id,
        shade: shade.to_string(),
        brand: brand.to_string(),
        cost_per_ounce,
        amount_used,
    }
}

fn formula(
    client_id: Uuid,
    client_name: &str,
    date: DateTime<Utc>,
    notes: &str,
    colors_used: Vec<ColorUsage>,
) -> FormulaRecord {
    let total_cost = colors_used.iter().map(ColorUsage::line_cost).sum();
    FormulaRecord {
        id: Uuid::new_v4(),
        client_id,
        client_name: client_name.to_string(),
        date,
        notes: notes.to_string(),
        before_image: None,
        after_image: None,
        colors_used,
        total_cost,
        created_at: Utc::now(),
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}
