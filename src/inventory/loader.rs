//! Bulk loading of catalog files
//!
//! A catalog file is a stream of whitespace-separated records:
//!
//! ```text
//! <name> <quantity> <price> <taxable:0|1>
//! ```
//!
//! Records usually sit one per line but may wrap; only the token order
//! matters.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::inventory::Catalog;
use crate::traits::*;
use crate::types::*;

const RECORD_FIELDS: usize = 4;

/// Outcome of a bulk load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Records inserted into the catalog
    pub loaded: usize,
    /// Records skipped because the name was already present
    pub duplicates: usize,
    /// Tokens left over at end of input that did not form a full record
    pub truncated: usize,
}

/// A whitespace-separated token and the line it came from
struct Token {
    line: usize,
    text: String,
}

impl<S: InventoryStorage> Catalog<S> {
    /// Load items from a catalog file.
    ///
    /// Fails with `FileOpen` if the file cannot be opened. Duplicate names
    /// are skipped; the first record for a name wins.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> InventoryResult<LoadSummary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InventoryError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let summary = self.load_from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            loaded = summary.loaded,
            duplicates = summary.duplicates,
            "catalog loaded"
        );
        Ok(summary)
    }

    /// Load items from catalog text held in memory
    pub fn load_from_str(&mut self, text: &str) -> InventoryResult<LoadSummary> {
        self.load_from_reader(text.as_bytes())
    }

    /// Load items from any buffered reader
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> InventoryResult<LoadSummary> {
        let mut summary = LoadSummary::default();
        let mut pending: Vec<Token> = Vec::with_capacity(RECORD_FIELDS);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            for text in line.split_whitespace() {
                pending.push(Token {
                    line: index + 1,
                    text: text.to_string(),
                });

                if pending.len() == RECORD_FIELDS {
                    let record = std::mem::take(&mut pending);
                    self.ingest_record(&record, &mut summary)?;
                }
            }
        }

        // Never build an item from a partial record
        if let Some(first) = pending.first() {
            warn!(
                line = first.line,
                tokens = pending.len(),
                "ignoring incomplete record at end of catalog"
            );
            summary.truncated = pending.len();
        }

        Ok(summary)
    }

    fn ingest_record(
        &mut self,
        record: &[Token],
        summary: &mut LoadSummary,
    ) -> InventoryResult<()> {
        let item = parse_record(record)?;
        let line = record[0].line;

        match self.insert_item(item) {
            Ok(()) => {
                summary.loaded += 1;
                Ok(())
            }
            Err(InventoryError::DuplicateItem(name)) => {
                debug!(item = %name, line, "skipping duplicate item");
                summary.duplicates += 1;
                Ok(())
            }
            Err(InventoryError::Validation(reason)) => {
                Err(InventoryError::MalformedRecord { line, reason })
            }
            Err(err) => Err(err),
        }
    }
}

fn parse_record(record: &[Token]) -> InventoryResult<Item> {
    let [name, quantity, price, taxable] = record else {
        return Err(InventoryError::MalformedRecord {
            line: record.first().map_or(0, |token| token.line),
            reason: format!("expected {} fields, found {}", RECORD_FIELDS, record.len()),
        });
    };

    let quantity_value = quantity
        .text
        .parse::<i64>()
        .map_err(|_| malformed(quantity, "quantity"))?;
    let price_value = BigDecimal::from_str(&price.text).map_err(|_| malformed(price, "price"))?;
    let taxable_value = match taxable.text.as_str() {
        "1" => true,
        "0" => false,
        _ => return Err(malformed(taxable, "taxable flag")),
    };

    Ok(Item::new(
        name.text.clone(),
        quantity_value,
        price_value,
        taxable_value,
    ))
}

fn malformed(token: &Token, field: &str) -> InventoryError {
    InventoryError::MalformedRecord {
        line: token.line,
        reason: format!("invalid {} '{}'", field, token.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Bread 10 2.00 1
Milk 5 3.49 0
Apples 40 0.50 0
";

    #[test]
    fn test_load_records() {
        let mut catalog = Catalog::in_memory();
        let summary = catalog.load_from_str(SAMPLE).unwrap();

        assert_eq!(summary.loaded, 3);
        assert_eq!(summary.duplicates, 0);
        assert_eq!(summary.truncated, 0);
        assert_eq!(catalog.size(), 3);

        let milk = catalog.find_item("Milk").unwrap();
        assert_eq!(milk.quantity, 5);
        assert_eq!(milk.price, BigDecimal::from_str("3.49").unwrap());
        assert!(!milk.taxable);
    }

    #[test]
    fn test_records_may_wrap_lines() {
        let mut catalog = Catalog::in_memory();
        let summary = catalog.load_from_str("Bread 10\n2.00 1 Milk\n5 3.49 0").unwrap();

        assert_eq!(summary.loaded, 2);
        assert!(catalog.find_item("Bread").is_some());
        assert!(catalog.find_item("Milk").is_some());
    }

    #[test]
    fn test_duplicates_skipped() {
        let mut catalog = Catalog::in_memory();
        let summary = catalog
            .load_from_str("Bread 10 2.00 1\nBread 3 9.99 0\n")
            .unwrap();

        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(catalog.find_item("Bread").unwrap().quantity, 10);
    }

    #[test]
    fn test_invalid_duplicate_does_not_stop_load() {
        let mut catalog = Catalog::in_memory();
        let summary = catalog
            .load_from_str("Bread 10 2.00 1\nBread -1 2.00 1\nMilk 5 3.49 0\n")
            .unwrap();

        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(catalog.find_item("Bread").unwrap().quantity, 10);
        assert!(catalog.find_item("Milk").is_some());
    }

    #[test]
    fn test_partial_trailing_record_ignored() {
        let mut catalog = Catalog::in_memory();
        let summary = catalog.load_from_str("Bread 10 2.00 1\nMilk 5\n").unwrap();

        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.truncated, 2);
        assert!(catalog.find_item("Milk").is_none());
    }

    #[test]
    fn test_trailing_blank_lines_add_nothing() {
        let mut catalog = Catalog::in_memory();
        let summary = catalog.load_from_str("Bread 10 2.00 1\n\n\n   \n").unwrap();

        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.truncated, 0);
        assert_eq!(catalog.size(), 1);
    }

    #[test]
    fn test_malformed_field_reports_line() {
        let mut catalog = Catalog::in_memory();
        let result = catalog.load_from_str("Bread 10 2.00 1\nMilk five 3.49 0\n");

        match result {
            Err(InventoryError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("quantity"));
            }
            other => panic!("expected malformed record, got {:?}", other),
        }
        // Records before the bad one stay loaded
        assert_eq!(catalog.size(), 1);
    }

    #[test]
    fn test_bad_taxable_flag() {
        let mut catalog = Catalog::in_memory();
        let result = catalog.load_from_str("Bread 10 2.00 yes\n");
        assert!(matches!(result, Err(InventoryError::MalformedRecord { .. })));
    }

    #[test]
    fn test_negative_values_rejected() {
        let mut catalog = Catalog::in_memory();
        let result = catalog.load_from_str("Bread -1 2.00 1\n");
        assert!(matches!(
            result,
            Err(InventoryError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let mut catalog = Catalog::in_memory();
        let result = catalog.load_from_file("/definitely/not/here/catalog.txt");

        let err = result.unwrap_err();
        assert!(matches!(err, InventoryError::FileOpen { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
