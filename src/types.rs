//! Core types and data structures for the grocery inventory

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tax::TaxError;

/// A sellable item held by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique name, used as the catalog key
    pub name: String,
    /// Units in stock. Checkout may drive this below zero unless the
    /// stock floor is enabled.
    pub quantity: i64,
    /// Unit price before tax
    pub price: BigDecimal,
    /// Whether the catalog tax rate applies to this item
    pub taxable: bool,
}

impl Item {
    /// Create a new item
    pub fn new(name: String, quantity: i64, price: BigDecimal, taxable: bool) -> Self {
        Self {
            name,
            quantity,
            price,
            taxable,
        }
    }

    /// Check whether at least one unit is in stock
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Errors that can occur while loading, editing or checking out the inventory
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Cannot open file '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("Item out of stock: {name} (quantity {available})")]
    OutOfStock { name: String, available: i64 },
    #[error("Malformed catalog record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error(transparent)]
    Tax(#[from] TaxError),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl InventoryError {
    /// Process exit code the command-line tool reports for this error.
    ///
    /// An unreadable input file exits with 1; every other failure exits with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            InventoryError::FileOpen { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
