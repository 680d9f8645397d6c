//! Discrepancy records produced by the comparator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::Path;
use crate::tree::Tree;

/// What went wrong at a location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// The expected tree has a key the actual tree lacks.
    MissingKey,
    /// The actual tree has a key the expected tree lacks (strict mode only).
    UnexpectedKey,
    /// Both trees hold a value here but they are not equal.
    ValueMismatch { expected: String, actual: String },
}

/// One reported difference between an expected and an actual tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Discrepancy {
    path: Path,
    #[serde(flatten)]
    kind: DiscrepancyKind,
}

impl Discrepancy {
    pub fn missing_key(path: Path) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::MissingKey,
        }
    }

    pub fn unexpected_key(path: Path) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::UnexpectedKey,
        }
    }

    /// A mismatch carrying the diagnostic rendering of both values.
    pub fn value_mismatch(path: Path, expected: &Tree, actual: &Tree) -> Self {
        Self {
            path,
            kind: DiscrepancyKind::ValueMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> &DiscrepancyKind {
        &self.kind
    }

    pub fn is_missing_key(&self) -> bool {
        matches!(self.kind, DiscrepancyKind::MissingKey)
    }

    pub fn is_unexpected_key(&self) -> bool {
        matches!(self.kind, DiscrepancyKind::UnexpectedKey)
    }

    pub fn is_value_mismatch(&self) -> bool {
        matches!(self.kind, DiscrepancyKind::ValueMismatch { .. })
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiscrepancyKind::MissingKey => {
                write!(f, "Expected key \"{}\" not found in actual", self.path)
            }
            DiscrepancyKind::UnexpectedKey => write!(
                f,
                "Actual key \"{}\" was unexpected and this is a strict comparison",
                self.path
            ),
            DiscrepancyKind::ValueMismatch { expected, actual } => write!(
                f,
                "Values are not equal at \"{}\": expected=\"{}\" and actual=\"{}\"",
                self.path, expected, actual
            ),
        }
    }
}
