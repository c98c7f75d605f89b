//! Domain service for newsletter subscriptions.

use crate::models::subscriber::{Subscriber, SubscriberEmail};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for SubscriptionError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait SubscriptionService: Send + Sync {
    /// Inserts the address or reactivates an existing one; never creates a
    /// second row for the same email.
    async fn subscribe(&self, email: &SubscriberEmail) -> Result<Subscriber, SubscriptionError>;
}
