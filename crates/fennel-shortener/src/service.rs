use crate::error::{Result, ShortenError};
use crate::shortener::Shortener;
use async_trait::async_trait;
use fennel_core::{RecordStore, ShortId, UrlRecord};
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the [`Shortener`] trait.
///
/// Holds no state of its own beyond the injected store handle: the
/// identifier is a pure function of the URL, and every write is a
/// full-record upsert, so concurrent callers need no coordination.
///
/// Note: two distinct URLs that collide on the 64-bit hash silently
/// overwrite each other, last writer wins. There is no detection and no
/// widening strategy.
#[derive(Debug, Clone)]
pub struct ShortenService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> ShortenService<S> {
    /// Creates a new `ShortenService` over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: RecordStore> Shortener for ShortenService<S> {
    async fn create(&self, url: &str) -> Result<ShortId> {
        if url.is_empty() {
            return Err(ShortenError::InvalidUrl("url cannot be empty".to_string()));
        }

        let record = UrlRecord::for_url(url);
        let short_id = record.short_id.clone();
        debug!(short_id = %short_id, url = %url, "shortening url");

        self.store.put_url(record).await?;

        Ok(short_id)
    }

    async fn resolve(&self, id: &ShortId) -> Result<String> {
        trace!(short_id = %id, "resolving short id");

        match self.store.get_url(id).await? {
            Some(record) => Ok(record.url),
            None => Err(ShortenError::NotFound(id.to_string())),
        }
    }
}
