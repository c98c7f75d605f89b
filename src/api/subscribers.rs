use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::types::SubscribeRequest;
use super::validation::validate_subscription;
use super::{ApiError, ApiResponse, AppState};

/// POST /subscribe
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Json(request) = payload?;
    let email = validate_subscription(&request)?;

    state.subscription_service().subscribe(&email).await?;
    metrics::counter!("subscriptions_total").increment(1);

    Ok(Json(ApiResponse::message("Subscribed successfully")))
}
