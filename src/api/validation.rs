use super::ApiError;
use super::types::SubscribeRequest;
use crate::models::enquiry::{EnquiryFields, EnquiryStatus, NewEnquiry};
use crate::models::subscriber::SubscriberEmail;

pub fn validate_enquiry(fields: EnquiryFields) -> Result<NewEnquiry, ApiError> {
    NewEnquiry::parse(fields).map_err(|e| ApiError::validation(e.to_string()))
}

pub fn validate_subscription(request: &SubscribeRequest) -> Result<SubscriberEmail, ApiError> {
    SubscriberEmail::parse(request.email.as_deref().unwrap_or_default())
        .map_err(|e| ApiError::validation(e.to_string()))
}

/// Path ids that do not parse as a positive integer are treated as unknown.
pub fn parse_enquiry_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

pub fn validate_status(raw: &str) -> Result<EnquiryStatus, String> {
    raw.trim().parse::<EnquiryStatus>().map_err(|e| e.to_string())
}
