//! Assertion wrapper: turns a non-empty comparison into a single failure.

use evmatch_types::Tree;
use tracing::debug;

use crate::compare::compare_report;
use crate::error::MatchResult;
use crate::report::Report;

/// The trees differed. Displays as the full rendered [`Report`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{report}")]
pub struct AssertionFailure {
    report: Report,
}

impl AssertionFailure {
    pub fn new(report: Report) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }
}

/// Compare two trees and fail once, listing every discrepancy, if they differ.
///
/// With `strict == false` the actual tree may carry keys the expected tree
/// does not mention:
///
/// ```
/// use evmatch_diff::{assert_matches, Tree};
/// use serde_json::json;
///
/// let expected = Tree::from(json!({"a": "b"}));
/// let actual = Tree::from(json!({"a": "b", "c": "d"}));
///
/// assert!(assert_matches(&expected, &actual, false).is_ok());
/// assert!(assert_matches(&expected, &actual, true).is_err());
/// ```
pub fn assert_matches(expected: &Tree, actual: &Tree, strict: bool) -> MatchResult<()> {
    let report = compare_report(expected, actual, strict)?;
    if report.is_empty() {
        return Ok(());
    }

    debug!(
        discrepancies = report.len(),
        missing = report.missing_keys(),
        unexpected = report.unexpected_keys(),
        mismatched = report.value_mismatches(),
        strict,
        "trees differ"
    );
    Err(AssertionFailure::new(report).into())
}

/// Panic with every discrepancy if `actual` does not match `expected`.
///
/// Both arguments are converted with `Tree::from`, so `serde_json::json!`
/// values, [`Tree`]s and strings are accepted. Comparison is non-strict
/// unless `strict = true` is given.
///
/// ```
/// use evmatch_diff::assert_event_matches;
/// use serde_json::json;
///
/// assert_event_matches!(json!({"name": "x"}), json!({"name": "x", "time": 1}));
/// assert_event_matches!(json!({"name": "x"}), json!({"name": "x"}), strict = true);
/// ```
#[macro_export]
macro_rules! assert_event_matches {
    ($expected:expr, $actual:expr, strict = $strict:expr $(,)?) => {{
        let expected = $crate::Tree::from($expected);
        let actual = $crate::Tree::from($actual);
        if let ::std::result::Result::Err(err) = $crate::assert_matches(&expected, &actual, $strict) {
            ::std::panic!("{}", err);
        }
    }};
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::assert_event_matches!($expected, $actual, strict = false)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use crate::report::REPORT_HEADER;
    use serde_json::json;

    #[test]
    fn matching_trees_pass() {
        let t = Tree::from(json!({"name": "x", "context": {"user_id": 1}}));
        assert!(assert_matches(&t, &t, true).is_ok());
    }

    #[test]
    fn single_failure_lists_every_discrepancy() {
        let expected = Tree::from(json!({"a": 1, "b": {"c": 2}, "d": 4}));
        let actual = Tree::from(json!({"a": 9, "b": {"c": 3}, "e": 5}));

        let err = assert_matches(&expected, &actual, true).unwrap_err();
        let failure = match err {
            MatchError::Assertion(failure) => failure,
            other => panic!("expected assertion failure, got {other:?}"),
        };
        assert_eq!(failure.report().len(), 4);

        let message = failure.to_string();
        assert!(message.starts_with(REPORT_HEADER));
        assert_eq!(message.lines().count(), 5);
        assert!(message.contains(r#"Values are not equal at "a": expected="1" and actual="9""#));
        assert!(message.contains(r#"Values are not equal at "b.c": expected="2" and actual="3""#));
        assert!(message.contains(r#"Expected key "d" not found in actual"#));
        assert!(message.contains(
            r#"Actual key "e" was unexpected and this is a strict comparison"#
        ));
    }

    #[test]
    fn decode_error_is_distinct_from_assertion_failure() {
        let expected = Tree::from(json!({"event": {"x": 1}}));
        let actual = Tree::from(json!({"event": "not json"}));

        let err = assert_matches(&expected, &actual, false).unwrap_err();
        assert!(matches!(err, MatchError::Decode(_)));
        assert!(err.to_string().contains("event"));
    }

    #[test]
    fn macro_accepts_json_values() {
        assert_event_matches!(json!({"a": "b"}), json!({"a": "b", "c": "d"}));
        assert_event_matches!(
            json!({"event": {"x": 1}}),
            json!({"event": "{\"x\": 1}"}),
        );
    }

    #[test]
    #[should_panic(expected = "Actual key \"c\" was unexpected")]
    fn macro_panics_in_strict_mode() {
        assert_event_matches!(json!({"a": "b"}), json!({"a": "b", "c": "d"}), strict = true);
    }

    #[test]
    #[should_panic(expected = "Unexpected event differences found:")]
    fn macro_panics_with_header() {
        assert_event_matches!(json!({"a": 1}), json!({"a": 2}));
    }
}
