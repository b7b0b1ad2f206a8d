//! Inventory module containing the catalog, bulk loading and checkout

pub mod catalog;
pub mod checkout;
pub mod loader;

pub use catalog::*;
pub use checkout::*;
pub use loader::*;
