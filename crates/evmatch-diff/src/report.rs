//! Aggregated comparison results.

use std::fmt;

use evmatch_types::Discrepancy;
use serde::{Deserialize, Serialize};

/// First line of every rendered report.
pub const REPORT_HEADER: &str = "Unexpected event differences found:";

/// The discrepancies found by one comparison, in comparator order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub discrepancies: Vec<Discrepancy>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the trees matched.
    pub fn is_empty(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Number of discrepancies.
    pub fn len(&self) -> usize {
        self.discrepancies.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Discrepancy> {
        self.discrepancies.iter()
    }

    /// Number of expected keys absent from the actual tree.
    pub fn missing_keys(&self) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| d.is_missing_key())
            .count()
    }

    /// Number of keys flagged by a strict comparison.
    pub fn unexpected_keys(&self) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| d.is_unexpected_key())
            .count()
    }

    /// Number of unequal values.
    pub fn value_mismatches(&self) -> usize {
        self.discrepancies
            .iter()
            .filter(|d| d.is_value_mismatch())
            .count()
    }

    /// The header line followed by one line per discrepancy.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<Vec<Discrepancy>> for Report {
    fn from(discrepancies: Vec<Discrepancy>) -> Self {
        Self { discrepancies }
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Discrepancy;
    type IntoIter = std::slice::Iter<'a, Discrepancy>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REPORT_HEADER)?;
        for discrepancy in &self.discrepancies {
            write!(f, "\n{discrepancy}")?;
        }
        Ok(())
    }
}
