//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::SearchResponse;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/trains/search", get(search_trains))
        .route("/api/trains/cache", delete(clear_cache))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name or code.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    Json(StationSearchResponse {
        stations: state.stations.search(&req.q),
    })
}

/// Search trains between two stations.
///
/// Only a malformed date is a client error; every other failure is
/// reported in the body with `success = false`.
async fn search_trains(
    State(state): State<AppState>,
    Query(req): Query<TrainSearchRequest>,
) -> Result<Json<Arc<SearchResponse>>, AppError> {
    let params = req
        .into_params(Local::now().date_naive())
        .map_err(|message| AppError::BadRequest { message })?;

    Ok(Json(state.search.search_trains(&params).await))
}

/// Drop every cached search response.
async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.search.cache().clear();
    info!("search cache cleared");
    StatusCode::NO_CONTENT
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
