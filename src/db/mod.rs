use crate::config::SecurityConfig;
use crate::models::enquiry::{Enquiry, EnquiryFilter, EnquiryStatus, NewEnquiry, StatusCount};
use crate::models::subscriber::{Subscriber, SubscriberEmail};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// Seeded on startup when the admin table is empty.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Current UTC time as fixed-width RFC 3339, so timestamps sort lexically.
pub(crate) fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

/// Pooled handle to the relational store. Each operation checks a connection
/// out of the pool and returns it when the query future completes or errors.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await?;
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// The underlying sqlx pool, shared with the session store.
    #[must_use]
    pub fn sqlite_pool(&self) -> &sea_orm::sqlx::SqlitePool {
        self.conn.get_sqlite_connection_pool()
    }

    fn enquiry_repo(&self) -> repositories::enquiry::EnquiryRepository {
        repositories::enquiry::EnquiryRepository::new(self.conn.clone())
    }

    fn subscriber_repo(&self) -> repositories::subscriber::SubscriberRepository {
        repositories::subscriber::SubscriberRepository::new(self.conn.clone())
    }

    fn admin_repo(&self) -> repositories::admin_user::AdminUserRepository {
        repositories::admin_user::AdminUserRepository::new(self.conn.clone())
    }

    /// Creates the default admin account if no admin exists yet.
    /// Returns true when an account was created.
    pub async fn ensure_default_admin(&self, security: &SecurityConfig) -> Result<bool> {
        if self.admin_repo().count().await? > 0 {
            return Ok(false);
        }

        self.admin_repo()
            .create(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD, security)
            .await?;
        info!("Seeded default admin account '{}'", DEFAULT_ADMIN_USERNAME);
        Ok(true)
    }

    pub async fn verify_admin_password(&self, username: &str, password: &str) -> Result<bool> {
        self.admin_repo().verify_password(username, password).await
    }

    pub async fn add_enquiry(&self, enquiry: &NewEnquiry) -> Result<Enquiry> {
        self.enquiry_repo().insert(enquiry).await
    }

    pub async fn get_enquiry(&self, id: i32) -> Result<Option<Enquiry>> {
        self.enquiry_repo().get(id).await
    }

    pub async fn list_enquiries(&self, filter: &EnquiryFilter) -> Result<Vec<Enquiry>> {
        self.enquiry_repo().list(filter).await
    }

    pub async fn enquiry_status_counts(&self) -> Result<Vec<StatusCount>> {
        self.enquiry_repo().status_counts().await
    }

    pub async fn update_enquiry_status(&self, id: i32, status: EnquiryStatus) -> Result<bool> {
        self.enquiry_repo().update_status(id, status).await
    }

    pub async fn upsert_subscriber(&self, email: &SubscriberEmail) -> Result<Subscriber> {
        self.subscriber_repo().upsert(email).await
    }

    pub async fn subscriber_count(&self) -> Result<u64> {
        self.subscriber_repo().count().await
    }

    pub async fn active_subscriber_count(&self) -> Result<u64> {
        self.subscriber_repo().count_active().await
    }
}
