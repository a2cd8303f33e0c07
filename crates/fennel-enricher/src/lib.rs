//! Change-driven preview enrichment for the Fennel URL shortener.
//!
//! The [`EnrichmentWorker`] consumes change batches from the store's
//! mutation feed, fetches webpage preview metadata for each newly written
//! URL through a [`PreviewFetcher`], and upserts whatever came back into
//! the preview keyspace. The whole pipeline is best effort: a failed or
//! timed-out fetch is skipped, never retried and never surfaced.

pub mod error;
pub mod fetcher;
pub mod http;
pub mod worker;

pub use error::FetchError;
pub use fetcher::{Preview, PreviewFetcher};
pub use http::HttpPreviewFetcher;
pub use worker::EnrichmentWorker;
