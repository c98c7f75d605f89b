use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{info, warn};

use super::auth::{sign_in, sign_out};
use super::page_error::PageError;
use super::types::{EnquiryQuery, LoginForm, StatusForm};
use super::validation::{parse_enquiry_id, validate_status};
use super::AppState;
use crate::constants::routes;
use crate::models::enquiry::EnquiryFilter;
use crate::views;

/// GET /admin/login
pub async fn login_page() -> Html<String> {
    views::admin::login(None)
}

/// POST /admin/login
/// Sets the session flag and redirects to the dashboard on success; otherwise
/// re-renders the login form with an error.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    let username = form.username.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    if !state.auth_service().verify(&username, &password).await {
        metrics::counter!("admin_logins_total", "outcome" => "failure").increment(1);
        warn!(username = %username, "Failed admin login");
        return Ok((
            StatusCode::UNAUTHORIZED,
            views::admin::login(Some("Invalid credentials")),
        )
            .into_response());
    }

    sign_in(&session, &username).await?;
    metrics::counter!("admin_logins_total", "outcome" => "success").increment(1);
    info!(username = %username, "Admin logged in");

    Ok(Redirect::to(routes::DASHBOARD).into_response())
}

/// GET /admin/logout
pub async fn logout(session: Session) -> Result<Redirect, PageError> {
    sign_out(&session).await?;
    Ok(Redirect::to(routes::LOGIN))
}

/// GET /admin
pub async fn index() -> Redirect {
    Redirect::to(routes::DASHBOARD)
}

/// GET /admin/dashboard
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let summary = state.enquiry_service().summary().await?;
    Ok(views::admin::dashboard(&summary))
}

/// GET /admin/enquiries?status=&search=
pub async fn list_enquiries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EnquiryQuery>,
) -> Result<Html<String>, PageError> {
    let filter = EnquiryFilter::from_params(query.status.as_deref(), query.search.as_deref());
    let listing = state.enquiry_service().list(&filter).await?;
    Ok(views::admin::enquiries(&listing, &filter))
}

/// GET /admin/enquiries/{id}
pub async fn enquiry_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_enquiry_id(&id).ok_or_else(PageError::enquiry_not_found)?;
    let enquiry = state.enquiry_service().get(id).await?;
    Ok(views::admin::enquiry_detail(&enquiry))
}

/// POST /admin/enquiries/{id}/status
pub async fn update_enquiry_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect, PageError> {
    let id = parse_enquiry_id(&id).ok_or_else(PageError::enquiry_not_found)?;
    let status = validate_status(&form.status).map_err(PageError::BadRequest)?;

    state.enquiry_service().update_status(id, status).await?;

    Ok(Redirect::to(&format!("{}/{id}", routes::ENQUIRIES)))
}
