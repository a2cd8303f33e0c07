use thiserror::Error;

/// Why a preview fetch produced nothing.
///
/// This is the explicit result the worker pattern-matches on when it
/// decides to skip an event; no variant is ever propagated out of batch
/// processing.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("fetch timed out")]
    Timeout,
    #[error("http request failed: {0}")]
    Http(String),
    #[error("unexpected http status: {0}")]
    Status(u16),
    #[error("unsupported content type: {0}")]
    UnsupportedContent(String),
}
