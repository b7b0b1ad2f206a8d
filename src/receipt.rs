//! Receipts produced by a checkout run

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tax::TaxRate;
use crate::types::Item;

const NAME_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 10;

/// Snapshot of an item's name and price at the moment it was sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub price: BigDecimal,
}

impl From<&Item> for ReceiptLine {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.clone(),
        }
    }
}

/// Why a checkout line did not make it onto the receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The name is not in the catalog
    NotFound,
    /// The stock floor is enabled and no units are left
    OutOfStock,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "not found"),
            SkipReason::OutOfStock => write!(f, "out of stock"),
        }
    }
}

/// A checkout line that was skipped instead of sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub name: String,
    pub reason: SkipReason,
}

/// Receipt for a single checkout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier for the receipt
    pub id: String,
    /// When the checkout ran (UTC)
    pub created_at: NaiveDateTime,
    /// Sold lines in checkout-file order
    pub lines: Vec<ReceiptLine>,
    /// Lines that were not sold
    pub skipped: Vec<SkippedLine>,
    /// Sum of line prices
    pub subtotal: BigDecimal,
    /// Tax on taxable lines
    pub tax_amount: BigDecimal,
    /// Subtotal plus tax
    pub total: BigDecimal,
    /// Rate used for this receipt
    pub tax_rate: TaxRate,
}

impl Receipt {
    /// Create an empty receipt taxed at the given rate
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            lines: Vec::new(),
            skipped: Vec::new(),
            subtotal: BigDecimal::from(0),
            tax_amount: BigDecimal::from(0),
            total: BigDecimal::from(0),
            tax_rate,
        }
    }

    /// Record the sale of one unit of an item
    pub fn add_sale(&mut self, item: &Item) {
        self.subtotal += &item.price;
        if item.taxable {
            self.tax_amount += self.tax_rate.tax_on(&item.price);
        }
        self.total = &self.subtotal + &self.tax_amount;
        self.lines.push(ReceiptLine::from(item));
    }

    /// Record a line that could not be sold
    pub fn add_skipped(&mut self, name: String, reason: SkipReason) {
        self.skipped.push(SkippedLine { name, reason });
    }

    /// Number of units sold
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Round an amount to cents for display
pub fn to_cents(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(NAME_WIDTH + AMOUNT_WIDTH);

        for line in &self.lines {
            writeln!(
                f,
                "{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}",
                line.name,
                to_cents(&line.price).to_string()
            )?;
        }
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}",
            "Subtotal",
            to_cents(&self.subtotal).to_string()
        )?;
        writeln!(
            f,
            "{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}",
            format!("Tax ({})", self.tax_rate),
            to_cents(&self.tax_amount).to_string()
        )?;
        write!(
            f,
            "{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}",
            "Total",
            to_cents(&self.total).to_string()
        )?;

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "{rule}")?;
            write!(f, "Not sold:")?;
            for skipped in &self.skipped {
                write!(f, "\n  {} ({})", skipped.name, skipped.reason)?;
            }
        }

        Ok(())
    }
}
