//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use grocery_checkout::{CheckoutPolicy, MissingItemPolicy, StockPolicy, TaxRate};

#[derive(Debug, Parser)]
#[command(name = "grocery-checkout", version)]
#[command(about = "Load a grocery catalog and ring up a checkout list")]
pub struct Cli {
    /// Catalog file: `<name> <quantity> <price> <taxable:0|1>` records
    #[arg(short, long, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Checkout file: one item name per line
    #[arg(short = 'o', long, value_name = "PATH")]
    pub checkout: PathBuf,

    /// Tax rate as a percentage (8.25) or a fraction (0.0825)
    #[arg(short, long, default_value = "0")]
    pub tax_rate: TaxRate,

    /// What to do with names that are not in the catalog
    #[arg(long, value_enum, default_value_t = OnMissing::Abort)]
    pub on_missing: OnMissing,

    /// Refuse to sell items whose quantity has reached zero
    #[arg(long)]
    pub stock_floor: bool,

    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnMissing {
    /// Fail the checkout without changing stock
    Abort,
    /// Leave unknown items off the receipt
    Skip,
}

impl Cli {
    pub fn policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            on_missing: match self.on_missing {
                OnMissing::Abort => MissingItemPolicy::Abort,
                OnMissing::Skip => MissingItemPolicy::Skip,
            },
            stock: if self.stock_floor {
                StockPolicy::FloorAtZero
            } else {
                StockPolicy::Unrestricted
            },
        }
    }
}
