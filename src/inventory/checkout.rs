//! Checkout: turning a list of item names into a receipt

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use crate::inventory::Catalog;
use crate::receipt::{Receipt, SkipReason};
use crate::traits::*;
use crate::types::*;

/// What checkout does with a name that is not in the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingItemPolicy {
    /// Fail the whole checkout with `ItemNotFound`; no stock is touched
    #[default]
    Abort,
    /// Leave the line off the receipt and carry on
    Skip,
}

/// How far checkout may draw stock down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockPolicy {
    /// Every sale decrements quantity, even below zero
    #[default]
    Unrestricted,
    /// Items at zero cannot be sold
    FloorAtZero,
}

/// Checkout behavior for a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    pub on_missing: MissingItemPolicy,
    pub stock: StockPolicy,
}

impl<S: InventoryStorage> Catalog<S> {
    /// Check out the items listed in a file, one name per line.
    ///
    /// Blank lines are ignored. Each listed name sells one unit.
    pub fn checkout(&mut self, path: impl AsRef<Path>) -> InventoryResult<Receipt> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InventoryError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, _>>()?;

        self.checkout_lines(lines)
    }

    /// Check out a sequence of item names held in memory
    pub fn checkout_lines<I, L>(&mut self, lines: I) -> InventoryResult<Receipt>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut receipt = Receipt::new(self.tax_rate.clone());
        let sales = self.plan_sales(lines, &mut receipt)?;

        for name in &sales {
            let item = self
                .storage
                .get_item_mut(name)
                .ok_or_else(|| InventoryError::ItemNotFound(name.clone()))?;
            item.quantity -= 1;
            receipt.add_sale(item);
        }

        info!(
            receipt = %receipt.id,
            items = receipt.item_count(),
            skipped = receipt.skipped.len(),
            total = %receipt.total,
            "checkout complete"
        );
        Ok(receipt)
    }

    /// Resolve every line before any stock moves, so an aborted checkout
    /// leaves the catalog as it was.
    fn plan_sales<I, L>(&self, lines: I, receipt: &mut Receipt) -> InventoryResult<Vec<String>>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut sales = Vec::new();
        let mut reserved: HashMap<String, i64> = HashMap::new();

        for line in lines {
            let name = line.as_ref().trim();
            if name.is_empty() {
                continue;
            }

            let Some(item) = self.storage.get_item(name) else {
                match self.policy.on_missing {
                    MissingItemPolicy::Abort => {
                        return Err(InventoryError::ItemNotFound(name.to_string()));
                    }
                    MissingItemPolicy::Skip => {
                        warn!(item = name, "skipping unknown item");
                        receipt.add_skipped(name.to_string(), SkipReason::NotFound);
                        continue;
                    }
                }
            };

            let taken = reserved.entry(name.to_string()).or_insert(0);
            let available = item.quantity - *taken;
            if self.policy.stock == StockPolicy::FloorAtZero && available <= 0 {
                match self.policy.on_missing {
                    MissingItemPolicy::Abort => {
                        return Err(InventoryError::OutOfStock {
                            name: name.to_string(),
                            available: available.max(0),
                        });
                    }
                    MissingItemPolicy::Skip => {
                        warn!(item = name, "skipping out-of-stock item");
                        receipt.add_skipped(name.to_string(), SkipReason::OutOfStock);
                        continue;
                    }
                }
            }

            *taken += 1;
            sales.push(name.to_string());
        }

        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn bread_catalog() -> Catalog {
        let mut catalog = Catalog::in_memory();
        catalog.add_item("Bread", 10, decimal("2.00"), true);
        catalog.set_tax_rate(BigDecimal::from(10)).unwrap();
        catalog
    }

    #[test]
    fn test_checkout_two_loaves() {
        let mut catalog = bread_catalog();
        let receipt = catalog.checkout_lines(["Bread", "Bread"]).unwrap();

        assert_eq!(receipt.subtotal, decimal("4.00"));
        assert_eq!(receipt.tax_amount, decimal("0.40"));
        assert_eq!(receipt.total, decimal("4.40"));
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(catalog.find_item("Bread").unwrap().quantity, 8);
    }

    #[test]
    fn test_untaxed_items_add_no_tax() {
        let mut catalog = bread_catalog();
        catalog.add_item("Apples", 40, decimal("0.50"), false);

        let receipt = catalog.checkout_lines(["Apples", "", "Bread", "  "]).unwrap();

        assert_eq!(receipt.subtotal, decimal("2.50"));
        assert_eq!(receipt.tax_amount, decimal("0.20"));
        assert_eq!(receipt.total, &receipt.subtotal + &receipt.tax_amount);
        let names: Vec<&str> = receipt.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Apples", "Bread"]);
    }

    #[test]
    fn test_missing_item_aborts_without_mutation() {
        let mut catalog = bread_catalog();
        let result = catalog.checkout_lines(["Bread", "Caviar", "Bread"]);

        assert!(matches!(result, Err(InventoryError::ItemNotFound(name)) if name == "Caviar"));
        assert_eq!(catalog.find_item("Bread").unwrap().quantity, 10);
    }

    #[test]
    fn test_missing_item_skipped() {
        let mut catalog = bread_catalog();
        catalog.set_checkout_policy(CheckoutPolicy {
            on_missing: MissingItemPolicy::Skip,
            ..CheckoutPolicy::default()
        });

        let receipt = catalog.checkout_lines(["Bread", "Caviar"]).unwrap();

        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.skipped.len(), 1);
        assert_eq!(receipt.skipped[0].name, "Caviar");
        assert_eq!(receipt.skipped[0].reason, SkipReason::NotFound);
        assert_eq!(catalog.find_item("Bread").unwrap().quantity, 9);
    }

    #[test]
    fn test_quantity_may_go_negative_by_default() {
        let mut catalog = Catalog::in_memory();
        catalog.add_item("Gum", 1, decimal("0.99"), true);

        catalog.checkout_lines(["Gum", "Gum", "Gum"]).unwrap();
        assert_eq!(catalog.find_item("Gum").unwrap().quantity, -2);
    }

    #[test]
    fn test_stock_floor_aborts() {
        let mut catalog = Catalog::in_memory();
        catalog.add_item("Gum", 1, decimal("0.99"), true);
        catalog.set_checkout_policy(CheckoutPolicy {
            stock: StockPolicy::FloorAtZero,
            ..CheckoutPolicy::default()
        });

        let result = catalog.checkout_lines(["Gum", "Gum"]);
        assert!(matches!(
            result,
            Err(InventoryError::OutOfStock { available: 0, .. })
        ));
        assert_eq!(catalog.find_item("Gum").unwrap().quantity, 1);
    }

    #[test]
    fn test_stock_floor_skips() {
        let mut catalog = Catalog::in_memory();
        catalog.add_item("Gum", 1, decimal("0.99"), false);
        catalog.set_checkout_policy(CheckoutPolicy {
            on_missing: MissingItemPolicy::Skip,
            stock: StockPolicy::FloorAtZero,
        });

        let receipt = catalog.checkout_lines(["Gum", "Gum"]).unwrap();
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.skipped[0].reason, SkipReason::OutOfStock);
        assert_eq!(catalog.find_item("Gum").unwrap().quantity, 0);
    }

    #[test]
    fn test_repeated_checkouts_keep_decrementing() {
        let mut catalog = bread_catalog();

        catalog.checkout_lines(["Bread"]).unwrap();
        catalog.checkout_lines(["Bread", "Bread"]).unwrap();

        assert_eq!(catalog.find_item("Bread").unwrap().quantity, 7);
    }

    #[test]
    fn test_receipt_snapshot_is_independent() {
        let mut catalog = bread_catalog();
        let receipt = catalog.checkout_lines(["Bread"]).unwrap();

        catalog.remove_item("Bread");
        assert_eq!(receipt.lines[0].name, "Bread");
        assert_eq!(receipt.lines[0].price, decimal("2.00"));
    }
}
