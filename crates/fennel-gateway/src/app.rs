use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{create_url_handler, health_handler, resolve_url_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/v1/urls", post(create_url_handler))
            // Redirects live at the root so short links stay short.
            .route("/{short_id}", get(resolve_url_handler))
            .with_state(state)
    }
}
