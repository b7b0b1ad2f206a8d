//! In-memory storage implementation

use std::collections::HashMap;

use crate::traits::*;
use crate::types::*;

/// Hash map backed item storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, Item>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all data (useful for testing)
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl InventoryStorage for MemoryStorage {
    fn save_item(&mut self, item: Item) -> InventoryResult<()> {
        if self.items.contains_key(&item.name) {
            return Err(InventoryError::DuplicateItem(item.name));
        }
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    fn get_item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.get_mut(name)
    }

    fn delete_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    fn list_items(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }
}
