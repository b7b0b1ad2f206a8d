//! Sales tax rate normalization and calculation

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single sales tax rate stored as a fraction (0.0825 for 8.25%)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(BigDecimal);

impl TaxRate {
    /// A zero rate; nothing is taxed
    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    /// Normalize a user-supplied rate.
    ///
    /// Values greater than 1 are percentages and are divided by 100. Values
    /// at or below 1 are already fractions and are kept as given, so `1`
    /// means 100%.
    pub fn normalize(value: BigDecimal) -> Result<Self, TaxError> {
        if value < BigDecimal::from(0) {
            return Err(TaxError::Negative(value.to_string()));
        }

        if value > BigDecimal::from(1) {
            Ok(Self(value / BigDecimal::from(100)))
        } else {
            Ok(Self(value))
        }
    }

    /// The rate as a fraction
    pub fn fraction(&self) -> &BigDecimal {
        &self.0
    }

    /// The rate as a percentage (10 for a 0.10 fraction)
    pub fn as_percentage(&self) -> BigDecimal {
        &self.0 * BigDecimal::from(100)
    }

    /// Tax owed on an amount at this rate
    pub fn tax_on(&self, amount: &BigDecimal) -> BigDecimal {
        amount * &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }
}

impl FromStr for TaxRate {
    type Err = TaxError;

    /// Parse a rate. A trailing `%` always marks a percentage, so `1%` is
    /// 0.01; without it the `normalize` rules apply.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, is_percentage) = match trimmed.strip_suffix('%') {
            Some(number) => (number.trim_end(), true),
            None => (trimmed, false),
        };
        let value = BigDecimal::from_str(number).map_err(|_| TaxError::Parse(s.to_string()))?;

        if !is_percentage {
            return Self::normalize(value);
        }
        if value < BigDecimal::from(0) {
            return Err(TaxError::Negative(value.to_string()));
        }
        Ok(Self(value / BigDecimal::from(100)))
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%",
            self.as_percentage().with_scale_round(2, RoundingMode::HalfUp)
        )
    }
}

/// Tax-related errors
#[derive(Debug, thiserror::Error)]
pub enum TaxError {
    #[error("Invalid tax rate: {0} is negative")]
    Negative(String),
    #[error("Invalid tax rate: cannot parse '{0}'")]
    Parse(String),
}
