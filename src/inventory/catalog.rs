//! Item catalog keyed by name

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::inventory::CheckoutPolicy;
use crate::tax::{TaxError, TaxRate};
use crate::traits::*;
use crate::types::*;
use crate::utils::MemoryStorage;

/// Catalog of sellable items, generic over its storage backend
pub struct Catalog<S: InventoryStorage = MemoryStorage> {
    pub(crate) storage: S,
    validator: Box<dyn ItemValidator>,
    pub(crate) tax_rate: TaxRate,
    pub(crate) policy: CheckoutPolicy,
}

impl Catalog<MemoryStorage> {
    /// Create an empty in-memory catalog
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}

impl Default for Catalog<MemoryStorage> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: InventoryStorage> Catalog<S> {
    /// Create a new catalog with the given storage backend
    pub fn new(storage: S) -> Self {
        Self::with_validator(storage, Box::new(DefaultItemValidator))
    }

    /// Create a new catalog with a custom validator
    pub fn with_validator(storage: S, validator: Box<dyn ItemValidator>) -> Self {
        Self {
            storage,
            validator,
            tax_rate: TaxRate::zero(),
            policy: CheckoutPolicy::default(),
        }
    }

    /// Add an item.
    ///
    /// Returns false and leaves the catalog untouched when the name is
    /// already present or the item fails validation.
    pub fn add_item(
        &mut self,
        name: &str,
        quantity: i64,
        price: BigDecimal,
        taxable: bool,
    ) -> bool {
        match self.insert_item(Item::new(name.to_string(), quantity, price, taxable)) {
            Ok(()) => true,
            Err(err) => {
                debug!(item = name, error = %err, "item rejected");
                false
            }
        }
    }

    /// Insert an item, reporting why it was rejected.
    ///
    /// A name that is already present is a duplicate regardless of the
    /// other fields; validation only runs for new names.
    pub fn insert_item(&mut self, item: Item) -> InventoryResult<()> {
        if self.storage.contains(&item.name) {
            return Err(InventoryError::DuplicateItem(item.name));
        }

        self.validator.validate_item(&item)?;

        self.storage.save_item(item)
    }

    /// Look up an item by name
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.storage.get_item(name)
    }

    pub fn find_item_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.storage.get_item_mut(name)
    }

    /// Look up an item by name, returning an error if not found
    pub fn find_item_required(&self, name: &str) -> InventoryResult<&Item> {
        self.find_item(name)
            .ok_or_else(|| InventoryError::ItemNotFound(name.to_string()))
    }

    /// Remove an item; false if the name was not present
    pub fn remove_item(&mut self, name: &str) -> bool {
        self.storage.delete_item(name).is_some()
    }

    /// Number of items in the catalog
    pub fn size(&self) -> usize {
        self.storage.count()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// All items, sorted by name
    pub fn items(&self) -> Vec<&Item> {
        let mut items = self.storage.list_items();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Set the tax rate from a percentage (values above 1) or a fraction
    pub fn set_tax_rate(&mut self, value: BigDecimal) -> Result<(), TaxError> {
        self.tax_rate = TaxRate::normalize(value)?;
        Ok(())
    }

    /// Replace the tax rate with an already normalized one
    pub fn use_tax_rate(&mut self, rate: TaxRate) {
        self.tax_rate = rate;
    }

    pub fn tax_rate(&self) -> &TaxRate {
        &self.tax_rate
    }

    /// Set how checkout treats missing and out-of-stock items
    pub fn set_checkout_policy(&mut self, policy: CheckoutPolicy) {
        self.policy = policy;
    }

    pub fn checkout_policy(&self) -> &CheckoutPolicy {
        &self.policy
    }
}
