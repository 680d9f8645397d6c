//! Key paths into a [`Tree`](crate::Tree).
//!
//! A path is rendered by joining its segments with `.`, so `["context", "foo"]`
//! displays as `context.foo`. Segments are kept verbatim, so a key that
//! itself contains a `.` renders ambiguously.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator placed between segments when a path is rendered.
pub const SEPARATOR: &str = ".";

/// Render a sequence of segments as a dot-joined string.
///
/// The empty sequence renders as the empty string.
pub fn format_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// An ordered sequence of key segments identifying a node inside a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    /// The empty path, designating the root of a tree.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// A new path extending this one by a single segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments (nesting depth).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if this path consists of exactly the given segments.
    pub fn is(&self, segments: &[&str]) -> bool {
        self.0.len() == segments.len() && self.0.iter().zip(segments).all(|(a, b)| a == b)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_path(&self.0))
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
