//! Zodiac plants HTTP API
//!
//! Each endpoint has a thin axum handler that delegates to an inner function
//! taking plain arguments, so the request logic is testable without going
//! through axum dispatch.
//!
//! Endpoints:
//! - GET  /          — plain-text usage message
//! - POST /recommend — plant record for a birthdate or sign
//! - GET  /comments  — all comments in insertion order
//! - POST /comments  — add a comment and/or rating
//! - GET  /health    — catalog and comment counts
//! - GET  /version   — server version info
//! - GET  /*         — static front-end with index fallback

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use zodiac_core::{Comment, PlantService, Recommendation};

use crate::assets::AssetRoot;
use crate::error::ApiError;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Zodiac Plant Recommendation API! Use POST /recommend with 'birthdate' or 'zodiac'.";

/// Shared state for all HTTP handlers
#[derive(Clone)]
pub struct HttpState {
    pub service: PlantService,
    pub assets: AssetRoot,
}

/// Build the Axum router with all endpoints
pub fn build_router(state: Arc<HttpState>) -> Router {
    let static_files = state.assets.service();

    Router::new()
        .route("/", get(home_handler))
        .route("/recommend", post(recommend_handler))
        .route("/comments", get(list_comments_handler).post(add_comment_handler))
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request / Response DTOs
// ============================================================================

/// `rating` accepts any JSON number, integer or not.
#[derive(Debug, Deserialize, Default)]
pub struct AddCommentRequest {
    pub comment: Option<String>,
    pub rating: Option<serde_json::Number>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// ============================================================================
// Inner (directly testable) functions
// ============================================================================

pub fn recommend_inner(
    service: &PlantService,
    body: &serde_json::Value,
) -> Result<Recommendation, ApiError> {
    let recommendation = service.recommend(body)?;
    tracing::debug!(zodiac = %recommendation.zodiac, "recommendation served");
    Ok(recommendation)
}

pub fn add_comment_inner(service: &PlantService, req: AddCommentRequest) -> Result<(), ApiError> {
    let comment = req.comment.unwrap_or_default();
    let rating = req.rating.unwrap_or_else(|| 0.into());
    service.add_comment(&comment, rating)?;
    Ok(())
}

pub fn list_comments_inner(service: &PlantService) -> Vec<Comment> {
    service.comments()
}

pub fn health_inner(service: &PlantService) -> serde_json::Value {
    serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog_signs": service.catalog().len(),
        "comments": service.comment_count(),
    })
}

/// Pure, no IO.
pub fn version_inner() -> serde_json::Value {
    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "service": "zodiac-plants",
    })
}

// ============================================================================
// Axum handler wrappers (thin — delegate to inner functions)
// ============================================================================

pub async fn home_handler() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn recommend_handler(
    State(state): State<Arc<HttpState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!(error = %e, "unreadable /recommend body");
        ApiError::MalformedPayload
    })?;
    recommend_inner(&state.service, &body).map(Json)
}

pub async fn list_comments_handler(State(state): State<Arc<HttpState>>) -> Json<Vec<Comment>> {
    Json(list_comments_inner(&state.service))
}

pub async fn add_comment_handler(
    State(state): State<Arc<HttpState>>,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "unreadable /comments body");
        ApiError::MalformedPayload
    })?;
    add_comment_inner(&state.service, req)?;
    Ok((StatusCode::CREATED, Json(SuccessResponse { success: true })))
}

pub async fn health_handler(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(health_inner(&state.service)))
}

pub async fn version_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(version_inner()))
}
