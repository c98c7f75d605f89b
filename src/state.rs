use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, EnquiryService, SeaOrmAuthService, SeaOrmEnquiryService,
    SeaOrmSubscriptionService, SubscriptionService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub enquiry_service: Arc<dyn EnquiryService>,

    pub subscription_service: Arc<dyn SubscriptionService>,
}

impl SharedState {
    /// Opens the store, applies migrations and seeds the default admin.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        store.ensure_default_admin(&config.security).await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let auth_service: Arc<dyn AuthService> = Arc::new(SeaOrmAuthService::new(store.clone()));
        let enquiry_service: Arc<dyn EnquiryService> =
            Arc::new(SeaOrmEnquiryService::new(store.clone()));
        let subscription_service: Arc<dyn SubscriptionService> =
            Arc::new(SeaOrmSubscriptionService::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            auth_service,
            enquiry_service,
            subscription_service,
        }
    }
}
