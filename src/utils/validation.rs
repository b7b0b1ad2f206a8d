//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that a price is not negative
pub fn validate_price(price: &BigDecimal) -> InventoryResult<()> {
    if *price < BigDecimal::from(0) {
        Err(InventoryError::Validation(format!(
            "Price cannot be negative: {}",
            price
        )))
    } else {
        Ok(())
    }
}

/// Validate that an item name can round-trip through a catalog file
pub fn validate_item_name(name: &str) -> InventoryResult<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::Validation(
            "Item name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(InventoryError::Validation(
            "Item name cannot exceed 100 characters".to_string(),
        ));
    }

    // Catalog files are whitespace-separated
    if name.chars().any(char::is_whitespace) {
        return Err(InventoryError::Validation(format!(
            "Item name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Validate that a price has no fractional cents
pub fn validate_price_precision(price: &BigDecimal) -> InventoryResult<()> {
    if price.with_scale(2) != *price {
        return Err(InventoryError::Validation(format!(
            "Price {} has more than two decimal places",
            price
        )));
    }

    Ok(())
}

/// Stricter item validator for catalogs that are written back to disk
pub struct StrictItemValidator;

impl ItemValidator for StrictItemValidator {
    fn validate_item(&self, item: &Item) -> InventoryResult<()> {
        DefaultItemValidator.validate_item(item)?;

        validate_item_name(&item.name)?;
        validate_price_precision(&item.price)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Peanut_Butter").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("Peanut Butter").is_err());
        assert!(validate_item_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_strict_validator_rejects_fractional_cents() {
        let validator = StrictItemValidator;

        let item = Item::new(
            "Gum".to_string(),
            1,
            BigDecimal::from_str("0.995").unwrap(),
            true,
        );
        assert!(validator.validate_item(&item).is_err());

        let item = Item::new(
            "Gum".to_string(),
            1,
            BigDecimal::from_str("0.99").unwrap(),
            true,
        );
        assert!(validator.validate_item(&item).is_ok());
    }
}
