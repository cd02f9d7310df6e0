//! Validation helpers for the ColorCraft salon studio
//!
//! These return plain messages; the core maps failures into its error
//! taxonomy at the mutation boundary.

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::models::ColorUsage;

// ============================================================================
// Inventory Validations
// ============================================================================

/// Validate a shade display name is non-empty after trimming
pub fn validate_shade(shade: &str) -> Result<(), &'static str> {
    if shade.trim().is_empty() {
        return Err("Shade name cannot be empty");
    }
    Ok(())
}

/// Validate a brand name is non-empty after trimming
pub fn validate_brand_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Brand name cannot be empty");
    }
    Ok(())
}

/// Validate unit size in ounces is strictly positive
pub fn validate_ounces_per_unit(ounces: Decimal) -> Result<(), &'static str> {
    if ounces <= Decimal::ZERO {
        return Err("Ounces per unit must be greater than zero");
    }
    Ok(())
}

/// Validate unit price is strictly positive
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Price must be greater than zero");
    }
    Ok(())
}

/// Case-insensitive comparison key for brand names
pub fn brand_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// ============================================================================
// Formula Validations
// ============================================================================

/// Validate the color list of a formula: at least one entry, every amount
/// strictly positive, no inventory item listed twice
pub fn validate_color_usages(colors: &[ColorUsage]) -> Result<(), &'static str> {
    if colors.is_empty() {
        return Err("A formula needs at least one color");
    }
    if colors.iter().any(|c| c.amount_used <= Decimal::ZERO) {
        return Err("Every color needs an amount greater than zero");
    }
    let mut seen = HashSet::new();
    for color in colors {
        if !seen.insert(color.color_id) {
            return Err("The same color cannot be added twice");
        }
    }
    Ok(())
}

/// Validate a client display name is non-empty after trimming
pub fn validate_client_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Client name cannot be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn usage(id: Uuid, amount: &str) -> ColorUsage {
        ColorUsage {
            color_id: id,
            shade: "Test Shade".to_string(),
            brand: "Test Brand".to_string(),
            cost_per_ounce: Decimal::from_str("7.75").unwrap(),
            amount_used: Decimal::from_str(amount).unwrap(),
        }
    }

    #[test]
    fn empty_shade_rejected() {
        assert!(validate_shade("").is_err());
        assert!(validate_shade("   ").is_err());
        assert!(validate_shade("Copper Red 6R").is_ok());
    }

    #[test]
    fn non_positive_numbers_rejected() {
        assert!(validate_ounces_per_unit(Decimal::ZERO).is_err());
        assert!(validate_ounces_per_unit(Decimal::from(-1)).is_err());
        assert!(validate_ounces_per_unit(Decimal::from(2)).is_ok());
        assert!(validate_price(Decimal::ZERO).is_err());
        assert!(validate_price(Decimal::from_str("15.50").unwrap()).is_ok());
    }

    #[test]
    fn color_usages_need_entries_and_amounts() {
        assert!(validate_color_usages(&[]).is_err());

        let id = Uuid::new_v4();
        assert!(validate_color_usages(&[usage(id, "0")]).is_err());
        assert!(validate_color_usages(&[usage(id, "3.5")]).is_ok());
    }

    #[test]
    fn duplicate_color_rejected() {
        let id = Uuid::new_v4();
        let colors = vec![usage(id, "1.0"), usage(id, "2.0")];
        assert!(validate_color_usages(&colors).is_err());

        let distinct = vec![usage(Uuid::new_v4(), "1.0"), usage(Uuid::new_v4(), "2.0")];
        assert!(validate_color_usages(&distinct).is_ok());
    }

    proptest! {
        #[test]
        fn brand_key_ignores_case_and_outer_whitespace(name in "[A-Za-z][A-Za-z ']{0,20}") {
            let spaced = format!("  {}  ", name);
            prop_assert_eq!(brand_key(&name), brand_key(&name.to_uppercase()));
            prop_assert_eq!(brand_key(&name), brand_key(&spaced));
        }
    }
}
