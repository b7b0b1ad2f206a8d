//! Traits for storage abstraction and extensibility

use crate::types::*;

/// Storage abstraction for the item catalog
///
/// The catalog works against any backend implementing these methods. Names
/// are the only key; implementations must keep them unique.
pub trait InventoryStorage {
    /// Insert an item, failing with `DuplicateItem` if the name is taken
    fn save_item(&mut self, item: Item) -> InventoryResult<()>;

    /// Get an item by name
    fn get_item(&self, name: &str) -> Option<&Item>;

    /// Get a mutable handle to an item by name
    fn get_item_mut(&mut self, name: &str) -> Option<&mut Item>;

    /// Remove an item, returning it if it was present
    fn delete_item(&mut self, name: &str) -> Option<Item>;

    /// List all items in no particular order
    fn list_items(&self) -> Vec<&Item>;

    /// Number of stored items
    fn count(&self) -> usize;

    fn contains(&self, name: &str) -> bool {
        self.get_item(name).is_some()
    }
}

/// Trait for implementing custom item validation rules
pub trait ItemValidator {
    /// Validate an item before it enters the catalog
    fn validate_item(&self, item: &Item) -> InventoryResult<()>;
}

/// Default item validator with basic rules
pub struct DefaultItemValidator;

impl ItemValidator for DefaultItemValidator {
    fn validate_item(&self, item: &Item) -> InventoryResult<()> {
        if item.name.trim().is_empty() {
            return Err(InventoryError::Validation(
                "Item name cannot be empty".to_string(),
            ));
        }

        if item.quantity < 0 {
            return Err(InventoryError::Validation(format!(
                "Quantity for '{}' cannot be negative",
                item.name
            )));
        }

        crate::utils::validate_price(&item.price)
    }
}
