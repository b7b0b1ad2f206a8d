//! # Grocery Checkout
//!
//! An in-memory grocery inventory with file-based bulk loading and
//! checkout receipts.
//!
//! ## Features
//!
//! - **Item catalog**: name-keyed items with quantity, price and a taxable flag
//! - **Bulk loading**: whitespace-separated catalog files
//! - **Checkout**: one item name per line, producing an itemized receipt
//! - **Tax policy**: a single rate given as a percentage or a fraction
//! - **Storage abstraction**: the catalog is generic over `InventoryStorage`
//!
//! ## Quick Start
//!
//! ```rust
//! use grocery_checkout::Catalog;
//! use bigdecimal::BigDecimal;
//!
//! let mut catalog = Catalog::in_memory();
//! catalog.add_item("Bread", 10, BigDecimal::from(2), true);
//! catalog.set_tax_rate(BigDecimal::from(10)).unwrap();
//!
//! let receipt = catalog.checkout_lines(["Bread", "Bread"]).unwrap();
//! assert_eq!(receipt.total, "4.40".parse::<BigDecimal>().unwrap());
//! ```

pub mod inventory;
pub mod receipt;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use inventory::*;
pub use receipt::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
