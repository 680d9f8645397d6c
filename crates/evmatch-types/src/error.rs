use thiserror::Error;

use crate::tree::TreeKind;

/// Errors produced by type operations.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAMapping { found: TreeKind },
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
