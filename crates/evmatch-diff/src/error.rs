//! Error types for the diff crate.

use evmatch_types::{Path, TypeError};

use crate::assert::AssertionFailure;

/// The encoded event payload could not be decoded into a mapping.
///
/// This signals malformed input, not a difference between the trees, and is
/// never reported as a [`Discrepancy`](evmatch_types::Discrepancy).
#[derive(Debug, thiserror::Error)]
#[error("cannot decode encoded mapping at \"{path}\": {source}")]
pub struct DecodeError {
    /// Location of the text that failed to decode.
    pub path: Path,
    pub source: TypeError,
}

/// Errors returned by [`assert_matches`](crate::assert_matches).
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Decoding the event payload failed before comparison finished.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The trees differ.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
}

/// Convenience alias for comparator results.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Convenience alias for assertion results.
pub type MatchResult<T> = Result<T, MatchError>;
