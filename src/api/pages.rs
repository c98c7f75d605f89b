use axum::{
    http::header,
    response::{Html, IntoResponse},
};

use crate::views;

/// GET /
pub async fn home() -> Html<String> {
    views::public::home()
}

/// GET /services
pub async fn services() -> Html<String> {
    views::public::services()
}

/// GET /contact
pub async fn contact() -> Html<String> {
    views::public::contact()
}

/// GET /static/site.js
pub async fn site_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        views::public::SITE_SCRIPT,
    )
}
