//! `SeaORM` implementation of the `SubscriptionService` trait.

use crate::db::Store;
use crate::models::subscriber::{Subscriber, SubscriberEmail};
use crate::services::subscription_service::{SubscriptionError, SubscriptionService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmSubscriptionService {
    store: Store,
}

impl SeaOrmSubscriptionService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubscriptionService for SeaOrmSubscriptionService {
    async fn subscribe(&self, email: &SubscriberEmail) -> Result<Subscriber, SubscriptionError> {
        let subscriber = self.store.upsert_subscriber(email).await?;
        info!(subscriber_id = subscriber.id, "Subscription recorded");
        Ok(subscriber)
    }
}
