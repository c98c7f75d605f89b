//! Integration tests for the admin gate and enquiry management pages.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use enquiry_desk::api::AppState;
use enquiry_desk::config::Config;
use enquiry_desk::db::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use enquiry_desk::models::enquiry::{EnquiryFields, EnquiryFilter, NewEnquiry};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use tower_sessions::{
    SessionStore,
    session::{Id, Record},
};

async fn spawn_app() -> (Router, Arc<AppState>) {
    let db_path = std::env::temp_dir().join(format!(
        "enquiry-desk-admin-test-{}.db",
        uuid::Uuid::new_v4()
    ));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.security.session_secret = Some("admin-test-secret".to_string());

    let state = enquiry_desk::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    (enquiry_desk::api::router(state.clone()), state)
}

async fn seed_enquiry(state: &AppState, name: &str, email: &str, phone: &str) -> i32 {
    let enquiry = NewEnquiry::parse(EnquiryFields {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        service: Some("consulting".to_string()),
        message: Some(format!("Message from {name}")),
    })
    .unwrap();

    state.store().add_enquiry(&enquiry).await.unwrap().id
}

fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect location")
        .to_str()
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Logs in with the seeded credentials and returns the session cookie pair.
async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(form_post(
            "/admin/login",
            &format!("username={DEFAULT_ADMIN_USERNAME}&password={DEFAULT_ADMIN_PASSWORD}"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_admin_pages_redirect_without_session() {
    let (app, _) = spawn_app().await;

    for uri in [
        "/admin",
        "/admin/dashboard",
        "/admin/enquiries",
        "/admin/enquiries/1",
        "/admin/metrics",
    ] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {uri}");
        assert_eq!(location(&response), "/admin/login");
    }

    let response = app
        .clone()
        .oneshot(form_post("/admin/enquiries/1/status", "status=closed", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_login_page_renders() {
    let (app, _) = spawn_app().await;

    let response = app.clone().oneshot(get("/admin/login", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("name=\"password\""));
}

#[tokio::test]
async fn test_wrong_credentials_are_rejected() {
    let (app, _) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/admin/login",
            "username=admin&password=wrong",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("Invalid credentials"));

    let response = app
        .clone()
        .oneshot(form_post("/admin/login", "username=nobody&password=admin123", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_dashboard_logout_flow() {
    let (app, state) = spawn_app().await;
    seed_enquiry(&state, "Jane Smith", "jane@example.com", "555-0100").await;

    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(get("/admin/dashboard", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Dashboard"));
    assert!(page.contains("1 enquiries in total, 0 active subscribers (0 ever signed up)"));

    let response = app
        .clone()
        .oneshot(get("/admin", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");

    let response = app
        .clone()
        .oneshot(get("/admin/logout", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    let response = app
        .clone()
        .oneshot(get("/admin/dashboard", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_tampered_cookie_is_not_trusted() {
    let (app, _) = spawn_app().await;
    let cookie = login(&app).await;

    let (name, value) = cookie.split_once('=').unwrap();
    let tampered = format!("{name}=x{value}");

    let response = app
        .clone()
        .oneshot(get("/admin/dashboard", Some(&tampered)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_enquiry_listing_filters_by_status_and_search() {
    let (app, state) = spawn_app().await;
    let smith = seed_enquiry(&state, "Jane Smith", "jane@example.com", "555-0100").await;
    let other = seed_enquiry(&state, "Bob Jones", "bob@example.com", "555-0200").await;
    seed_enquiry(&state, "Carol", "carol.smith@example.com", "555-0300").await;

    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(form_post(
            &format!("/admin/enquiries/{other}/status"),
            "status=resolved",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .clone()
        .oneshot(get("/admin/enquiries?status=new", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Jane Smith"));
    assert!(page.contains("Carol"));
    assert!(!page.contains("Bob Jones"));

    let response = app
        .clone()
        .oneshot(get("/admin/enquiries?status=all", Some(&cookie)))
        .await
        .unwrap();
    let page = body_text(response).await;
    assert!(page.contains("Jane Smith"));
    assert!(page.contains("Bob Jones"));
    assert!(page.contains("Carol"));

    let response = app
        .clone()
        .oneshot(get("/admin/enquiries?search=smith", Some(&cookie)))
        .await
        .unwrap();
    let page = body_text(response).await;
    assert!(page.contains(&format!("/admin/enquiries/{smith}\"")));
    assert!(page.contains("carol.smith@example.com"));
    assert!(!page.contains("Bob Jones"));

    let response = app
        .clone()
        .oneshot(get("/admin/enquiries?status=archived", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No enquiries match"));
}

#[tokio::test]
async fn test_enquiry_detail_and_status_update() {
    let (app, state) = spawn_app().await;
    let id = seed_enquiry(&state, "Dana <Admin>", "dana@example.com", "555-0400").await;

    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/admin/enquiries/{id}"), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Dana &lt;Admin&gt;"));
    assert!(page.contains("Message from Dana"));

    let response = app
        .clone()
        .oneshot(form_post(
            &format!("/admin/enquiries/{id}/status"),
            "status=in_progress",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/admin/enquiries/{id}"));

    let stored = state.store().get_enquiry(id).await.unwrap().unwrap();
    assert_eq!(stored.status, "in_progress");

    let response = app
        .clone()
        .oneshot(form_post(
            &format!("/admin/enquiries/{id}/status"),
            "status=bogus",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = state.store().get_enquiry(id).await.unwrap().unwrap();
    assert_eq!(stored.status, "in_progress");
}

#[tokio::test]
async fn test_unknown_enquiry_returns_not_found() {
    let (app, _) = spawn_app().await;
    let cookie = login(&app).await;

    for uri in [
        "/admin/enquiries/9999",
        "/admin/enquiries/abc",
        "/admin/enquiries/-1",
    ] {
        let response = app.clone().oneshot(get(uri, Some(&cookie))).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
        assert!(body_text(response).await.contains("Enquiry not found"));
    }

    let response = app
        .clone()
        .oneshot(form_post(
            "/admin/enquiries/9999/status",
            "status=closed",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submitted_enquiry_shows_trimmed_in_detail_view() {
    let (app, state) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit-enquiry")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "name": "  Jane Smith ",
                        "email": "jane@example.com ",
                        "phone": " 555-0100",
                        "service": "web-design",
                        "message": "  Need a new site.  "
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = state
        .store()
        .list_enquiries(&EnquiryFilter::default())
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    let id = stored[0].id;

    let cookie = login(&app).await;
    let response = app
        .clone()
        .oneshot(get(&format!("/admin/enquiries/{id}"), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("<dd>Jane Smith</dd>"));
    assert!(page.contains("<dd>jane@example.com</dd>"));
    assert!(page.contains("<dd>555-0100</dd>"));
    assert!(page.contains("<dd>web-design</dd>"));
    assert!(page.contains("<dd>new</dd>"));
    assert!(page.contains(">Need a new site.</p>"));
}

#[tokio::test]
async fn test_session_cleanup_removes_expired_records() {
    let (_, state) = spawn_app().await;
    let now = time::OffsetDateTime::now_utc();

    let mut expired = Record {
        id: Id::default(),
        data: HashMap::default(),
        expiry_date: now - time::Duration::hours(1),
    };
    let mut live = Record {
        id: Id::default(),
        data: HashMap::default(),
        expiry_date: now + time::Duration::hours(1),
    };
    state.session_store.create(&mut expired).await.unwrap();
    state.session_store.create(&mut live).await.unwrap();

    let handle = enquiry_desk::api::spawn_session_cleanup(
        state.session_store.clone(),
        Duration::from_millis(50),
    );
    tokio::time::sleep(Duration::from_millis(300)).await;
    handle.abort();

    let remaining: Vec<String> = sea_orm::sqlx::query_scalar("SELECT id FROM tower_sessions")
        .fetch_all(state.store().sqlite_pool())
        .await
        .unwrap();
    assert_eq!(remaining, vec![live.id.to_string()]);
}
