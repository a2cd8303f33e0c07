use crate::error::FetchError;
use async_trait::async_trait;

/// Preview metadata returned by a fetch attempt.
///
/// Any subset of fields may be present; the worker drops empty values
/// before writing a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Retrieves webpage preview metadata for a URL.
///
/// Implementations should bound their own I/O; the worker additionally
/// enforces a hard budget around every call, so a fetch that overruns is
/// cancelled and counted as failed.
#[async_trait]
pub trait PreviewFetcher: Send + Sync + 'static {
    async fn fetch(&self, url: &str) -> Result<Preview, FetchError>;
}
