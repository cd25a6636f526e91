//! Unified error handling for store operations.

use crate::cache::CacheError;
use crate::schema::SchemaError;

/// Errors surfaced by [`crate::store::FormStore`] operations.
///
/// `load` never returns these; it folds its failures into a
/// [`crate::store::LoadOutcome`] tag instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `save` was asked to persist with no schema resident.
    #[error("no schema is resident in the store")]
    NoResidentSchema,

    /// Persistent cache failures, including write errors.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// File reads at the import and default-document boundaries.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document that is not valid JSON or not schema-shaped JSON.
    #[error("invalid schema document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Structural validation failures (import only).
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Convenience alias used throughout the store layer.
pub type StoreResult<T> = Result<T, StoreError>;
