//! HTTP entry point for the Fennel URL shortener.
//!
//! Exposes the create/resolve contract over axum: `POST /v1/urls` to
//! shorten, `GET /{short_id}` to redirect. The binary under `bin/http`
//! wires the store, shortener, and enrichment worker together.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::ApiError;
pub use state::AppState;
