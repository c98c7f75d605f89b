use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::validation::validate_enquiry;
use super::{ApiError, ApiResponse, AppState};
use crate::models::enquiry::EnquiryFields;

/// POST /submit-enquiry
pub async fn submit_enquiry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EnquiryFields>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let Json(fields) = payload?;
    let enquiry = validate_enquiry(fields)?;

    state.enquiry_service().submit(enquiry).await?;
    metrics::counter!("enquiries_submitted_total").increment(1);

    Ok(Json(ApiResponse::message("Enquiry submitted successfully")))
}
