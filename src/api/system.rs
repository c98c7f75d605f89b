use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::types::HealthStatus;
use super::{ApiResponse, AppState};

/// GET /health
/// Liveness plus a store round-trip. Returns 503 when the store is unreachable.
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    let uptime = state.start_time.elapsed().as_secs();

    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(HealthStatus {
                status: "ok",
                database: "ok",
                uptime,
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed to reach database: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    success: false,
                    message: None,
                    data: Some(HealthStatus {
                        status: "degraded",
                        database: "unreachable",
                        uptime,
                    }),
                    error: Some("Database unreachable".to_string()),
                }),
            )
        }
    }
}
