use async_trait::async_trait;
use fennel_core::change::Result;
use fennel_core::{BatchId, ChangeBatch, ChangeEvent, ChangeStream, StreamError};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{mpsc, Mutex};
use tracing::trace;

/// Upper bound on events delivered in a single batch.
const MAX_BATCH_EVENTS: usize = 32;

/// Change stream consumer for [`MemoryStore`](crate::MemoryStore).
///
/// Events arrive in write order over an unbounded channel. `next_batch`
/// waits for at least one event, then greedily drains up to
/// [`MAX_BATCH_EVENTS`] more without waiting. The delivered batch stays
/// in flight until acknowledged; polling again before the ack returns
/// the same batch, which gives the consumer at-least-once semantics.
#[derive(Debug)]
pub struct MemoryChangeStream {
    events: Mutex<mpsc::UnboundedReceiver<ChangeEvent>>,
    in_flight: Mutex<Option<ChangeBatch>>,
    next_id: AtomicU64,
}

impl MemoryChangeStream {
    pub(crate) fn new(events: mpsc::UnboundedReceiver<ChangeEvent>) -> Self {
        Self {
            events: Mutex::new(events),
            in_flight: Mutex::new(None),
            next_id: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl ChangeStream for MemoryChangeStream {
    async fn next_batch(&self) -> Result<ChangeBatch> {
        // The receiver lock serializes concurrent polls; the in-flight
        // slot is only held briefly so an `ack` from another task is
        // never stuck behind a poll waiting for events.
        let mut events = self.events.lock().await;

        // Redeliver an unacked batch instead of advancing past it.
        if let Some(batch) = self.in_flight.lock().await.as_ref() {
            trace!(batch_id = batch.id, "redelivering unacked batch");
            return Ok(batch.clone());
        }

        let first = events.recv().await.ok_or(StreamError::Closed)?;
        let mut batch_events = vec![first];
        while batch_events.len() < MAX_BATCH_EVENTS {
            match events.try_recv() {
                Ok(event) => batch_events.push(event),
                Err(_) => break,
            }
        }

        let batch = ChangeBatch {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            events: batch_events,
        };
        trace!(batch_id = batch.id, events = batch.events.len(), "delivering batch");

        *self.in_flight.lock().await = Some(batch.clone());
        Ok(batch)
    }

    async fn ack(&self, id: BatchId) -> Result<()> {
        let mut in_flight = self.in_flight.lock().await;

        match in_flight.take() {
            Some(batch) if batch.id == id => Ok(()),
            other => {
                *in_flight = other;
                Err(StreamError::UnknownBatch(id))
            }
        }
    }
}
