use crate::stream::MemoryChangeStream;
use async_trait::async_trait;
use dashmap::DashMap;
use fennel_core::store::Result;
use fennel_core::{ChangeEvent, PreviewRecord, RecordStore, ShortId, UrlRecord};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::trace;

/// In-memory implementation of [`RecordStore`] backed by DashMaps.
///
/// DashMap's sharded locks let concurrent callers hit different keys
/// without blocking each other, which matches the store's contract of
/// independent point operations.
///
/// Every `put_url` publishes a change event to the paired
/// [`MemoryChangeStream`]. Preview-keyspace writes publish nothing; only
/// the short-id keyspace is streamed. If the stream consumer has gone
/// away the event is dropped, since enrichment is optional.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    urls: DashMap<String, UrlRecord>,
    previews: DashMap<String, PreviewRecord>,
    changes: mpsc::UnboundedSender<ChangeEvent>,
}

impl MemoryStore {
    /// Creates a store together with the change stream fed by its
    /// short-id-keyspace writes.
    ///
    /// The stream sees [`StreamError::Closed`](fennel_core::StreamError)
    /// once every clone of the store has been dropped and all pending
    /// events have been consumed.
    pub fn new() -> (Self, MemoryChangeStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Self {
            inner: Arc::new(Inner {
                urls: DashMap::new(),
                previews: DashMap::new(),
                changes: tx,
            }),
        };
        (store, MemoryChangeStream::new(rx))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put_url(&self, record: UrlRecord) -> Result<()> {
        trace!(short_id = %record.short_id, url = %record.url, "put url record");

        self.inner
            .urls
            .insert(record.short_id.as_str().to_owned(), record.clone());

        // Publish after the write lands, mirroring a storage-layer
        // change feed. A missing consumer is not an error.
        let _ = self.inner.changes.send(ChangeEvent { record });

        Ok(())
    }

    async fn get_url(&self, id: &ShortId) -> Result<Option<UrlRecord>> {
        Ok(self.inner.urls.get(id.as_str()).map(|r| r.value().clone()))
    }

    async fn put_preview(&self, record: PreviewRecord) -> Result<()> {
        trace!(url = %record.url, "put preview record");

        self.inner.previews.insert(record.url.clone(), record);
        Ok(())
    }

    async fn get_preview(&self, url: &str) -> Result<Option<PreviewRecord>> {
        Ok(self.inner.previews.get(url).map(|r| r.value().clone()))
    }
}
