mod cli;

use crate::cli::CLI;
use clap::Parser;
use fennel_enricher::worker::FETCH_BUDGET;
use fennel_enricher::{EnrichmentWorker, HttpPreviewFetcher};
use fennel_gateway::{App, AppState};
use fennel_shortener::{ShortenService, Shortener};
use fennel_store::MemoryStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    let (store, changes) = MemoryStore::new();
    let store = Arc::new(store);

    let shortener: Arc<dyn Shortener> = Arc::new(ShortenService::new(store.clone()));

    let fetcher = Arc::new(HttpPreviewFetcher::new(FETCH_BUDGET));
    let worker = EnrichmentWorker::new(store.clone(), changes, fetcher);
    tokio::spawn(worker.run());

    let app = App::router(AppState::new(shortener)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, app).await?;

    Ok(())
}
