use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{
    SessionManagerLayer, cookie::Key, cookie::SameSite, session_store::ExpiredDeletion,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::Config;
use crate::state::SharedState;

mod admin;
pub mod auth;
mod enquiries;
mod error;
mod observability;
mod page_error;
mod pages;
mod subscribers;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use page_error::PageError;
pub use types::*;

use crate::services::{AuthService, EnquiryService, SubscriptionService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub session_store: SqliteStore,

    pub session_key: Key,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn auth_service(&self) -> &Arc<dyn AuthService> {
        &self.shared.auth_service
    }

    #[must_use]
    pub fn enquiry_service(&self) -> &Arc<dyn EnquiryService> {
        &self.shared.enquiry_service
    }

    #[must_use]
    pub fn subscription_service(&self) -> &Arc<dyn SubscriptionService> {
        &self.shared.subscription_service
    }
}

pub async fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let session_store = SqliteStore::new(shared.store.sqlite_pool().clone());
    session_store
        .migrate()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to prepare session table: {e}"))?;

    let session_key =
        auth::derive_session_key(shared.config.security.session_secret_or_fallback())?;

    Ok(Arc::new(AppState {
        shared,
        session_store,
        session_key,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    create_app_state(shared, prometheus_handle).await
}

/// Deletes expired session records every `period` until the task is aborted.
pub fn spawn_session_cleanup(
    store: SqliteStore,
    period: std::time::Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = store.continuously_delete_expired(period).await {
            tracing::error!("Session cleanup stopped: {e}");
        }
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let session_layer = SessionManagerLayer::new(state.session_store.clone())
        .with_secure(state.config().server.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_signed(state.session_key.clone());

    let protected_routes = create_protected_router();

    Router::new()
        .route("/", get(pages::home))
        .route("/services", get(pages::services))
        .route("/contact", get(pages::contact))
        .route("/static/site.js", get(pages::site_script))
        .route("/submit-enquiry", post(enquiries::submit_enquiry))
        .route("/subscribe", post(subscribers::subscribe))
        .route("/health", get(system::health))
        .route("/admin/login", get(admin::login_page).post(admin::login))
        .route("/admin/logout", get(admin::logout))
        .merge(protected_routes)
        .layer(session_layer)
        .with_state(state)
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(middleware::from_fn(observability::logging_middleware))
        .layer(TraceLayer::new_for_http())
}

fn create_protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/enquiries", get(admin::list_enquiries))
        .route("/admin/enquiries/{id}", get(admin::enquiry_detail))
        .route(
            "/admin/enquiries/{id}/status",
            post(admin::update_enquiry_status),
        )
        .route("/admin/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn(auth::require_admin))
}
