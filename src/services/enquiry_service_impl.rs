//! `SeaORM` implementation of the `EnquiryService` trait.

use crate::db::Store;
use crate::models::enquiry::{
    DashboardSummary, Enquiry, EnquiryFilter, EnquiryListing, EnquiryStatus, NewEnquiry,
};
use crate::services::enquiry_service::{EnquiryError, EnquiryService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmEnquiryService {
    store: Store,
}

impl SeaOrmEnquiryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EnquiryService for SeaOrmEnquiryService {
    async fn submit(&self, enquiry: NewEnquiry) -> Result<Enquiry, EnquiryError> {
        let created = self.store.add_enquiry(&enquiry).await?;
        info!(
            enquiry_id = created.id,
            service = %created.service,
            "Enquiry submitted"
        );
        Ok(created)
    }

    async fn list(&self, filter: &EnquiryFilter) -> Result<EnquiryListing, EnquiryError> {
        let (enquiries, status_counts) = tokio::try_join!(
            self.store.list_enquiries(filter),
            self.store.enquiry_status_counts()
        )?;

        Ok(EnquiryListing {
            enquiries,
            status_counts,
        })
    }

    async fn get(&self, id: i32) -> Result<Enquiry, EnquiryError> {
        self.store
            .get_enquiry(id)
            .await?
            .ok_or(EnquiryError::NotFound(id))
    }

    async fn update_status(&self, id: i32, status: EnquiryStatus) -> Result<(), EnquiryError> {
        if !self.store.update_enquiry_status(id, status).await? {
            return Err(EnquiryError::NotFound(id));
        }
        info!(enquiry_id = id, status = %status, "Enquiry status updated");
        Ok(())
    }

    async fn summary(&self) -> Result<DashboardSummary, EnquiryError> {
        let (status_counts, active_subscribers, total_subscribers) = tokio::try_join!(
            self.store.enquiry_status_counts(),
            self.store.active_subscriber_count(),
            self.store.subscriber_count()
        )?;

        Ok(DashboardSummary {
            total_enquiries: status_counts.iter().map(|c| c.count).sum(),
            status_counts,
            active_subscribers,
            total_subscribers,
        })
    }
}
