use crate::error::{ApiError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use fennel_core::ShortId;

pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUrlRequest>,
) -> Result<Response> {
    let short_id = state.shortener().create(&request.url).await?;

    let body = CreateUrlResponse {
        shortened_url: short_id.to_string(),
    };
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

pub async fn resolve_url_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // An id that could never have been produced by create resolves to
    // nothing, same as an unknown one.
    let short_id = ShortId::parse(short_id).map_err(|_| ApiError::NotFound)?;

    let url = state.shortener().resolve(&short_id).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url)]).into_response())
}
