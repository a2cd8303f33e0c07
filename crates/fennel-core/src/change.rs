use crate::error::StreamError;
use crate::record::UrlRecord;
use async_trait::async_trait;

/// Result type for change stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Identifier of an in-flight [`ChangeBatch`].
pub type BatchId = u64;

/// A mutation event emitted when the short-id keyspace is written.
///
/// Carries the new image of the written record. Delivery is at least
/// once: consumers must tolerate seeing the same event again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub record: UrlRecord,
}

/// A batch of change events delivered together.
///
/// A batch stays in flight until its id is acknowledged; an unacked batch
/// is redelivered by the next poll.
#[derive(Debug, Clone)]
pub struct ChangeBatch {
    pub id: BatchId,
    pub events: Vec<ChangeEvent>,
}

/// Consumer side of the store's mutation feed.
///
/// Modeled as an explicit poll/ack loop so the at-least-once redelivery
/// boundary is visible to the consumer rather than hidden behind a
/// host-invoked callback.
#[async_trait]
pub trait ChangeStream: Send + Sync + 'static {
    /// Waits for the next batch of change events.
    ///
    /// If a previously delivered batch has not been acknowledged it is
    /// returned again unchanged. Returns [`StreamError::Closed`] once no
    /// further events can arrive.
    async fn next_batch(&self) -> Result<ChangeBatch>;

    /// Acknowledges a delivered batch, allowing the stream to advance.
    async fn ack(&self, id: BatchId) -> Result<()>;
}
