//! Serializable comparison settings.

use serde::{Deserialize, Serialize};

use evmatch_types::{Discrepancy, Tree};

use crate::compare::{compare, compare_report};
use crate::error::{DecodeResult, MatchResult};
use crate::report::Report;

/// Settings for a comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// When `true`, keys present only in the actual tree are reported and
    /// the encoded event payload is never decoded.
    pub strict: bool,
}

impl CompareOptions {
    /// Options for a strict comparison.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn compare(&self, expected: &Tree, actual: &Tree) -> DecodeResult<Vec<Discrepancy>> {
        compare(expected, actual, self.strict)
    }

    pub fn report(&self, expected: &Tree, actual: &Tree) -> DecodeResult<Report> {
        compare_report(expected, actual, self.strict)
    }

    pub fn assert_matches(&self, expected: &Tree, actual: &Tree) -> MatchResult<()> {
        crate::assert::assert_matches(expected, actual, self.strict)
    }
}
