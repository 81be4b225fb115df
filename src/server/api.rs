//! REST API handlers
//!
//! This module defines the API routes and handlers for the comment pipeline.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::error::Error;
use crate::service::{FetchOutcome, FetchRequest, LotteryOutcome, LotteryRequest};

use super::server::AppState;

// ============================================================================
// API Response Types
// ============================================================================

/// Uniform response envelope
///
/// On success the payload's fields sit next to `success`; on failure only
/// `message` is present.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> From<crate::error::Result<T>> for ApiResponse<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => {
                log_failure(&e);
                Self::failure(e.to_string())
            }
        }
    }
}

fn log_failure(err: &Error) {
    tracing::warn!(category = err.category().as_str(), error = %err, "Request failed");
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

// ============================================================================
// API Routes
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/fetch_comments", post(fetch_comments))
        .route("/api/run_lottery", post(run_lottery))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    }))
}

/// Fetch all comments of an article
async fn fetch_comments(
    State(state): State<AppState>,
    payload: Result<Json<FetchRequest>, JsonRejection>,
) -> Json<ApiResponse<FetchOutcome>> {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return Json(ApiResponse::failure(rejection.body_text())),
    };

    tracing::info!(
        url = %request.url,
        include_fold = request.include_fold,
        include_replies = request.include_replies,
        "Fetch comments request"
    );

    Json(state.service.fetch_comments(&request).await.into())
}

/// Fetch comments and draw winners
async fn run_lottery(
    State(state): State<AppState>,
    payload: Result<Json<LotteryRequest>, JsonRejection>,
) -> Json<ApiResponse<LotteryOutcome>> {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return Json(ApiResponse::failure(rejection.body_text())),
    };

    tracing::info!(
        url = %request.fetch.url,
        winner_count = request.winner_count,
        "Run lottery request"
    );

    Json(state.service.run_lottery(&request).await.into())
}

// ============================================================================
// Tests
// ============================================================================
