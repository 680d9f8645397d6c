//! Recursive tree comparison.
//!
//! Keys are visited in ascending order. At each mapping node the missing
//! keys are reported first, then (strict only) the unexpected keys, then
//! the differences found inside children present on both sides.

use evmatch_types::{Discrepancy, Path, Tree};
use tracing::debug;

use crate::error::{DecodeError, DecodeResult};
use crate::report::Report;

/// Top-level field whose actual value may arrive as JSON text.
///
/// Only the root-level key with this name is decoded, and only in
/// non-strict comparisons against an expected mapping.
pub const EVENT_PAYLOAD_FIELD: &str = "event";

/// Compare `actual` against the `expected` template.
///
/// Returns every discrepancy reachable from the two roots. Fails only when
/// the encoded event payload cannot be decoded into a mapping.
pub fn compare(expected: &Tree, actual: &Tree, strict: bool) -> DecodeResult<Vec<Discrepancy>> {
    debug_assert!(
        expected.is_well_formed() && actual.is_well_formed(),
        "scalar holding an object or string; build trees with Tree::from"
    );
    let mut found = Vec::new();
    compare_at(expected, actual, strict, &Path::root(), &mut found)?;
    Ok(found)
}

/// Like [`compare`], wrapped in a [`Report`].
pub fn compare_report(expected: &Tree, actual: &Tree, strict: bool) -> DecodeResult<Report> {
    compare(expected, actual, strict).map(Report::from)
}

fn compare_at(
    expected: &Tree,
    actual: &Tree,
    strict: bool,
    path: &Path,
    found: &mut Vec<Discrepancy>,
) -> DecodeResult<()> {
    let decoded;
    let actual = match decode_event_payload(expected, actual, strict, path)? {
        Some(tree) => {
            decoded = tree;
            &decoded
        }
        None => actual,
    };

    match (expected, actual) {
        (Tree::Mapping(expected_map), Tree::Mapping(actual_map)) => {
            for key in expected_map.keys().filter(|k| !actual_map.contains_key(*k)) {
                found.push(Discrepancy::missing_key(path.child(key)));
            }

            if strict {
                for key in actual_map.keys().filter(|k| !expected_map.contains_key(*k)) {
                    found.push(Discrepancy::unexpected_key(path.child(key)));
                }
            }

            for (key, expected_child) in expected_map {
                if let Some(actual_child) = actual_map.get(key) {
                    compare_at(expected_child, actual_child, strict, &path.child(key), found)?;
                }
            }
        }
        _ => {
            if expected != actual {
                found.push(Discrepancy::value_mismatch(path.clone(), expected, actual));
            }
        }
    }

    Ok(())
}

fn decode_event_payload(
    expected: &Tree,
    actual: &Tree,
    strict: bool,
    path: &Path,
) -> DecodeResult<Option<Tree>> {
    if strict || !expected.is_mapping() || !path.is(&[EVENT_PAYLOAD_FIELD]) {
        return Ok(None);
    }
    let Some(text) = actual.as_text() else {
        return Ok(None);
    };

    let tree = Tree::parse_mapping(text).map_err(|source| DecodeError {
        path: path.clone(),
        source,
    })?;
    debug!(%path, bytes = text.len(), "decoded encoded event payload");
    Ok(Some(tree))
}
