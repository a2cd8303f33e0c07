use crate::error::StoreError;
use crate::record::{PreviewRecord, UrlRecord};
use crate::short_id::ShortId;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A durable key-value mapping with two independent keyspaces:
/// `short_id -> UrlRecord` and `url -> PreviewRecord`.
///
/// Only point reads and point upserts are supported; there are no range
/// queries and no transactions across keyspaces. All writes are
/// full-record upserts (last writer wins), so no read-modify-write
/// discipline is required of callers.
///
/// Services receive a store handle at construction time; the handle is
/// opened once at process start and shared.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Upserts a URL mapping. Overwrites any existing record under the
    /// same `short_id`, which makes re-submission of the same URL
    /// idempotent and makes a hash collision a silent overwrite.
    async fn put_url(&self, record: UrlRecord) -> Result<()>;

    /// Point lookup in the short-id keyspace.
    async fn get_url(&self, id: &ShortId) -> Result<Option<UrlRecord>>;

    /// Upserts preview metadata, keyed by the record's `url`.
    async fn put_preview(&self, record: PreviewRecord) -> Result<()>;

    /// Point lookup in the preview keyspace.
    async fn get_preview(&self, url: &str) -> Result<Option<PreviewRecord>>;
}
