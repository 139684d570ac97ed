use thiserror::Error;

/// Errors surfaced by the scoring core and its collaborators.
///
/// `Validation` and `InsufficientData` abort the operation that raised them;
/// bulk aggregation paths instead skip the offending record and count it.
/// There is no unknown-zone variant: `Zone` is a closed enum and
/// classification is total.
#[derive(Debug, Error)]
pub enum AqrError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
