//! Foundation types for evmatch.
//!
//! This crate provides the data model shared by the comparator and its
//! callers. Every other evmatch crate depends on `evmatch-types`.
//!
//! # Key Types
//!
//! - [`Tree`] -- Tagged union over mappings, text, and opaque scalars
//! - [`Path`] -- Ordered key segments locating a node inside a tree
//! - [`Discrepancy`] -- One reported difference between two trees
//! - [`DiscrepancyKind`] -- Missing key, unexpected key, or value mismatch

pub mod discrepancy;
pub mod error;
pub mod path;
pub mod tree;

pub use discrepancy::{Discrepancy, DiscrepancyKind};
pub use error::{TypeError, TypeResult};
pub use path::{format_path, Path};
pub use tree::{Tree, TreeKind};
