//! Integration tests for the public pages and JSON endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use enquiry_desk::api::AppState;
use enquiry_desk::config::Config;
use enquiry_desk::entities::{prelude::Subscribers, subscribers};
use enquiry_desk::models::enquiry::EnquiryFilter;
use http_body_util::BodyExt;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, sea_query::Expr};
use std::sync::Arc;
use tower::ServiceExt;

async fn spawn_app() -> (Router, Arc<AppState>) {
    let db_path =
        std::env::temp_dir().join(format!("enquiry-desk-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.security.session_secret = Some("api-test-secret".to_string());

    let state = enquiry_desk::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    (enquiry_desk::api::router(state.clone()), state)
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_public_pages_render() {
    let (app, _) = spawn_app().await;

    for uri in ["/", "/services", "/contact"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/site.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("javascript")
    );
}

#[tokio::test]
async fn test_submit_enquiry_persists_trimmed_values() {
    let (app, state) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/submit-enquiry",
            &serde_json::json!({
                "name": "  Jane Smith ",
                "email": "jane@example.com ",
                "phone": " 555-0100",
                "service": "web-design",
                "message": "  Need a new site.  "
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Enquiry submitted successfully");

    let stored = state
        .store()
        .list_enquiries(&EnquiryFilter::default())
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Jane Smith");
    assert_eq!(stored[0].email, "jane@example.com");
    assert_eq!(stored[0].phone, "555-0100");
    assert_eq!(stored[0].message, "Need a new site.");
    assert_eq!(stored[0].status, "new");
}

#[tokio::test]
async fn test_submit_enquiry_missing_field_is_rejected() {
    let (app, state) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/submit-enquiry",
            &serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "service": "consulting",
                "message": "Hello"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required fields");

    let response = app
        .clone()
        .oneshot(post_json(
            "/submit-enquiry",
            &serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "phone": "   ",
                "service": "consulting",
                "message": "Hello"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(
        state
            .store()
            .list_enquiries(&EnquiryFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_submit_enquiry_malformed_body_is_rejected() {
    let (app, state) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit-enquiry")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);

    assert!(
        state
            .store()
            .list_enquiries(&EnquiryFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_subscribe_twice_keeps_one_active_row() {
    let (app, state) = spawn_app().await;

    for email in ["news@example.com", "  news@example.com  "] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/subscribe",
                &serde_json::json!({ "email": email }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Subscribed successfully");
    }

    let rows = Subscribers::find().all(&state.store().conn).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "news@example.com");
    assert!(rows[0].is_active);
}

#[tokio::test]
async fn test_subscribe_reactivates_inactive_subscriber() {
    let (app, state) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/subscribe",
            &serde_json::json!({ "email": "back@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    Subscribers::update_many()
        .col_expr(subscribers::Column::IsActive, Expr::value(false))
        .filter(subscribers::Column::Email.eq("back@example.com"))
        .exec(&state.store().conn)
        .await
        .unwrap();
    assert_eq!(state.store().active_subscriber_count().await.unwrap(), 0);

    let response = app
        .clone()
        .oneshot(post_json(
            "/subscribe",
            &serde_json::json!({ "email": "back@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(state.store().subscriber_count().await.unwrap(), 1);
    assert_eq!(state.store().active_subscriber_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_subscribe_requires_valid_email() {
    let (app, state) = spawn_app().await;

    for payload in [
        serde_json::json!({ "email": "not-an-email" }),
        serde_json::json!({ "email": "   " }),
        serde_json::json!({}),
    ] {
        let response = app
            .clone()
            .oneshot(post_json("/subscribe", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Valid email is required");
    }

    assert_eq!(state.store().subscriber_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "ok");
}
