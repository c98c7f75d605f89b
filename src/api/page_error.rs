use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::services::EnquiryError;
use crate::views;

/// Errors raised by the admin pages, rendered as the HTML error view.
#[derive(Debug)]
pub enum PageError {
    NotFound(String),

    BadRequest(String),

    Database(String),

    Internal(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotFound(msg) => write!(f, "Not found: {}", msg),
            PageError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            PageError::Database(msg) => write!(f, "Database error: {}", msg),
            PageError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PageError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            PageError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            PageError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            PageError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, views::admin::error(&message)).into_response()
    }
}

impl From<EnquiryError> for PageError {
    fn from(err: EnquiryError) -> Self {
        match err {
            EnquiryError::NotFound(_) => PageError::enquiry_not_found(),
            EnquiryError::Database(msg) => PageError::Database(msg),
        }
    }
}

impl From<tower_sessions::session::Error> for PageError {
    fn from(err: tower_sessions::session::Error) -> Self {
        PageError::Internal(format!("Session error: {err}"))
    }
}

impl PageError {
    pub fn enquiry_not_found() -> Self {
        PageError::NotFound("Enquiry not found".to_string())
    }
}
