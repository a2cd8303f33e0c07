use crate::fetcher::{Preview, PreviewFetcher};
use fennel_core::{ChangeBatch, ChangeEvent, ChangeStream, PreviewRecord, RecordStore, StreamError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Hard per-event budget for a preview fetch.
pub const FETCH_BUDGET: Duration = Duration::from_millis(1000);

/// Consumes change batches and writes preview records.
///
/// Each event is handled independently: a fetch that fails or overruns
/// its budget is skipped with a debug trace and the worker moves on to
/// the sibling events. Nothing on this path is retried, dead-lettered,
/// or propagated into the create/resolve path. Duplicate delivery of an
/// event is harmless because the preview write is an idempotent upsert.
pub struct EnrichmentWorker<S, C, F> {
    store: Arc<S>,
    stream: C,
    fetcher: Arc<F>,
    fetch_budget: Duration,
}

impl<S, C, F> EnrichmentWorker<S, C, F>
where
    S: RecordStore,
    C: ChangeStream,
    F: PreviewFetcher,
{
    /// Creates a worker with the default [`FETCH_BUDGET`].
    pub fn new(store: Arc<S>, stream: C, fetcher: Arc<F>) -> Self {
        Self {
            store,
            stream,
            fetcher,
            fetch_budget: FETCH_BUDGET,
        }
    }

    /// Overrides the per-event fetch budget.
    pub fn with_fetch_budget(mut self, budget: Duration) -> Self {
        self.fetch_budget = budget;
        self
    }

    /// Runs the poll/process/ack loop until the stream closes.
    ///
    /// A batch is acknowledged only after every event in it has been
    /// handled; if the worker dies mid-batch the whole batch is
    /// redelivered, which at-least-once consumers must tolerate anyway.
    pub async fn run(self) -> Result<(), StreamError> {
        loop {
            let batch = match self.stream.next_batch().await {
                Ok(batch) => batch,
                Err(StreamError::Closed) => {
                    info!("change stream closed, stopping enrichment worker");
                    return Ok(());
                }
                Err(error) => return Err(error),
            };

            self.process_batch(&batch).await;
            self.stream.ack(batch.id).await?;
        }
    }

    /// Handles every event of a batch, isolating per-event failures.
    pub async fn process_batch(&self, batch: &ChangeBatch) {
        debug!(batch_id = batch.id, events = batch.events.len(), "processing change batch");
        for event in &batch.events {
            self.process_event(event).await;
        }
    }

    async fn process_event(&self, event: &ChangeEvent) {
        let url = &event.record.url;

        // The budget doubles as cancellation: an overrunning fetch is
        // abandoned here and no partial write can follow.
        let preview = match timeout(self.fetch_budget, self.fetcher.fetch(url)).await {
            Ok(Ok(preview)) => preview,
            Ok(Err(error)) => {
                debug!(url = %url, error = %error, "preview fetch failed, skipping event");
                return;
            }
            Err(_) => {
                debug!(url = %url, "preview fetch exceeded budget, skipping event");
                return;
            }
        };

        let record = preview_record(url, preview);
        if let Err(error) = self.store.put_preview(record).await {
            warn!(url = %url, error = %error, "failed to write preview record");
        }
    }
}

/// Assembles the preview record, keeping only non-empty fields.
///
/// A fetch that yielded nothing still produces a url-only record.
fn preview_record(url: &str, preview: Preview) -> PreviewRecord {
    PreviewRecord {
        url: url.to_owned(),
        title: non_empty(preview.title),
        description: non_empty(preview.description),
        image: non_empty(preview.image),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
