//! `SeaORM` implementation of the `AuthService` trait.

use crate::db::Store;
use crate::services::auth_service::AuthService;
use async_trait::async_trait;
use tracing::{debug, error};

pub struct SeaOrmAuthService {
    store: Store,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn verify(&self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }

        match self.store.verify_admin_password(username, password).await {
            Ok(valid) => {
                if !valid {
                    debug!(username, "Admin credentials rejected");
                }
                valid
            }
            Err(e) => {
                error!(username, error = %e, "Admin verification error");
                false
            }
        }
    }
}
