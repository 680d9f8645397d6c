//! Structural comparator for evmatch.
//!
//! Compares an expected tree against an actual tree and enumerates every
//! difference instead of stopping at the first one. Non-strict comparisons
//! assert a subset relationship; strict comparisons also flag extra keys.
//!
//! # Key Types
//!
//! - [`compare`] / [`compare_report`] -- Raw discrepancy list or [`Report`]
//! - [`assert_matches`] / [`assert_event_matches!`] -- Aggregated assertion
//! - [`CompareOptions`] -- Serializable comparison settings
//!
//! Recursion depth equals the nesting depth of the compared trees, so very
//! deeply nested input is bounded by the thread's stack size.

pub mod assert;
pub mod compare;
pub mod error;
pub mod options;
pub mod report;

pub use assert::{assert_matches, AssertionFailure};
pub use compare::{compare, compare_report, EVENT_PAYLOAD_FIELD};
pub use error::{DecodeError, DecodeResult, MatchError, MatchResult};
pub use evmatch_types::{format_path, Discrepancy, DiscrepancyKind, Path, Tree, TreeKind};
pub use options::CompareOptions;
pub use report::{Report, REPORT_HEADER};
