//! Error types for the diff crate.

use snapdiff_types::ValueError;

/// Errors from the JSON-facing diff helpers.
///
/// Comparing and diffing typed values never fails; only crossing the JSON
/// boundary can.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The updated document is not a JSON object.
    #[error("updated snapshot: {0}")]
    Updated(#[source] ValueError),

    /// The current document is not a JSON object.
    #[error("current snapshot: {0}")]
    Current(#[source] ValueError),

    /// The resulting diff could not be rendered as JSON.
    #[error("diff output: {0}")]
    Output(#[source] ValueError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
