//! Domain service for enquiries: public submission and the admin views.

use crate::models::enquiry::{
    DashboardSummary, Enquiry, EnquiryFilter, EnquiryListing, EnquiryStatus, NewEnquiry,
};
use thiserror::Error;

/// Errors specific to enquiry operations.
#[derive(Debug, Error)]
pub enum EnquiryError {
    #[error("Enquiry {0} not found")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for EnquiryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for enquiries.
#[async_trait::async_trait]
pub trait EnquiryService: Send + Sync {
    /// Persists a validated enquiry with status "new".
    async fn submit(&self, enquiry: NewEnquiry) -> Result<Enquiry, EnquiryError>;

    /// Filtered rows (newest first) together with per-status counts over
    /// the whole table.
    async fn list(&self, filter: &EnquiryFilter) -> Result<EnquiryListing, EnquiryError>;

    /// # Errors
    ///
    /// Returns [`EnquiryError::NotFound`] for an unknown id.
    async fn get(&self, id: i32) -> Result<Enquiry, EnquiryError>;

    /// # Errors
    ///
    /// Returns [`EnquiryError::NotFound`] for an unknown id.
    async fn update_status(&self, id: i32, status: EnquiryStatus) -> Result<(), EnquiryError>;

    async fn summary(&self) -> Result<DashboardSummary, EnquiryError>;
}
