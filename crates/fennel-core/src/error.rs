use crate::change::BatchId;
use thiserror::Error;

/// Errors for the core validation paths.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short id: {0}")]
    InvalidShortId(String),
}

/// Errors surfaced by a [`RecordStore`](crate::store::RecordStore) backend.
///
/// Primary-path callers must propagate these; they are never silently
/// swallowed the way enrichment fetch failures are.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by a [`ChangeStream`](crate::change::ChangeStream) consumer.
#[derive(Debug, Clone, Error)]
pub enum StreamError {
    #[error("change stream closed")]
    Closed,
    #[error("no in-flight batch with id {0}")]
    UnknownBatch(BatchId),
    #[error("change stream operation failed: {0}")]
    Operation(String),
}
