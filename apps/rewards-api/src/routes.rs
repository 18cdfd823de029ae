//! # Receipt Routes
//!
//! The two receipt operations plus liveness, wired onto [`ReceiptStore`].
//!
//! The handlers are routing glue: everything with actual logic lives in
//! `tally-core`, and the receipt reaching the store or the calculator is the
//! wire value, unmodified.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use tally_core::{points, validation, Receipt};

use crate::error::ApiError;
use crate::state::ReceiptStore;

// =============================================================================
// Response Types
// =============================================================================

/// Response for a processed (accepted) receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Identifier the receipt was stored under.
    pub id: String,
}

/// Response for a points lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    /// Total reward points for the stored receipt.
    pub points: u64,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router over a receipt store.
pub fn router(store: ReceiptStore) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(receipt_points))
        .route("/health", get(health))
        .with_state(store)
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /receipts/process` - validate, assign an id, store.
///
/// The body is taken as raw JSON first: a payload that does not even
/// deserialize into the receipt shape (wrong-typed fields, scalar items) is
/// an invalid receipt, not a server fault.
async fn process_receipt(
    State(store): State<ReceiptStore>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ProcessResponse>, ApiError> {
    debug!("processing submitted receipt");

    let receipt: Receipt =
        serde_json::from_value(body).map_err(|_| ApiError::InvalidReceipt)?;

    if !validation::validate_receipt(&receipt) {
        info!("receipt rejected by validation");
        return Err(ApiError::InvalidReceipt);
    }

    let id = Uuid::new_v4().to_string();
    store.insert(id.clone(), receipt);
    info!(%id, stored = store.len(), "receipt accepted");

    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points` - look up and score.
async fn receipt_points(
    State(store): State<ReceiptStore>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    debug!(%id, "looking up receipt");

    let receipt = store.get(&id).ok_or_else(|| {
        info!(%id, "no receipt under id");
        ApiError::ReceiptNotFound
    })?;

    let points = points::score(&receipt);
    info!(%id, points, "scored receipt");

    Ok(Json(PointsResponse { points }))
}

/// `GET /health` - liveness.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
