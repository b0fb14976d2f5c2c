use thiserror::Error;

/// Errors produced when moving values across the JSON boundary.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for value conversions.
pub type ValueResult<T> = Result<T, ValueError>;
