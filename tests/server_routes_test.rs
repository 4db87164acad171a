use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use portfolio_site::config::env::{API_BASE_URL_VAR, API_KEY_VAR, TO_EMAIL_VAR};
use portfolio_site::domain::model::{ContactSubmission, Profile, RelayOutcome};
use portfolio_site::{
    create_router, serve, AppState, ContactRelay, MailRelay, RelayConfig, ResendClient, Result, SiteError,
    UnconfiguredRelay,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

struct StubRelay {
    succeed: bool,
    calls: AtomicUsize,
}

impl StubRelay {
    fn new(succeed: bool) -> Arc<Self> {
        Arc::new(Self {
            succeed,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ContactRelay for StubRelay {
    async fn relay(&self, _submission: &ContactSubmission) -> Result<RelayOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(RelayOutcome { success: true })
        } else {
            Err(SiteError::DeliveryFailed)
        }
    }
}

fn router_with(relay: Arc<dyn ContactRelay>) -> Router {
    create_router(AppState::new(relay, Profile::default()))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_index_renders_portfolio() {
    let app = router_with(StubRelay::new(true));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Devaraju G"));
    assert!(html.contains("Featured Projects"));
    assert!(html.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_index_uses_theme_cookie_and_menu_query() {
    let app = router_with(StubRelay::new(true));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?menu=open")
                .header(header::COOKIE, "theme=dark")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains(r#"<html lang="en" class="dark">"#));
    assert!(html.contains("mobile-menu"));
}

#[tokio::test]
async fn test_theme_toggle_round_trip() {
    let app = router_with(StubRelay::new(true));

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .header(header::COOKIE, "theme=light")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(first.headers()[header::LOCATION], "/");
    let cookie = first.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("theme=dark"));

    let stored = cookie.split(';').next().unwrap().to_string();
    let second = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .header(header::COOKIE, stored)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let cookie = second.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("theme=light"));
}

#[tokio::test]
async fn test_form_success_resets_fields() {
    let relay = StubRelay::new(true);
    let app = router_with(relay.clone());

    let response = app
        .oneshot(form_request("name=Jane&email=jane%40x.com&message=Hi+there"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Message sent successfully!"));
    assert!(!html.contains(r#"value="Jane""#));
    assert!(!html.contains("Hi there"));
    assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_form_failure_preserves_fields() {
    let relay = StubRelay::new(false);
    let app = router_with(relay.clone());

    let response = app
        .oneshot(form_request("name=Jane&email=jane%40x.com&message=Hi+there"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_string(response).await;
    assert!(html.contains("Failed to send message"));
    assert!(html.contains(r#"value="Jane""#));
    assert!(html.contains(r#"value="jane@x.com""#));
    assert!(html.contains("Hi there"));
}

#[tokio::test]
async fn test_json_contract_success_against_provider() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(r#"{"subject": "New contact form submission from Jane"}"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "msg_1"}));
    });

    let config = RelayConfig::from_lookup(|key| match key {
        API_KEY_VAR => Some("re_live".to_string()),
        TO_EMAIL_VAR => Some("owner@example.com".to_string()),
        API_BASE_URL_VAR => Some(server.base_url()),
        _ => None,
    })
    .unwrap();
    let relay = Arc::new(MailRelay::new(ResendClient::from_config(&config).unwrap(), config));
    let app = router_with(relay);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"Jane","email":"jane@x.com","message":"Hi"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, serde_json::json!({"success": true}));
    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_json_contract_reports_config_error() {
    let relay = Arc::new(UnconfiguredRelay::new(SiteError::MissingConfigError {
        field: "TO_EMAIL".to_string(),
    }));
    let app = router_with(relay);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"Jane","email":"jane@x.com","message":"Hi"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing TO_EMAIL environment variable");
}

#[tokio::test]
async fn test_health_check() {
    let app = router_with(StubRelay::new(true));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "portfolio-site");
}

#[tokio::test]
async fn test_serve_reports_address_in_use() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap();

    let state = AppState::new(StubRelay::new(true), Profile::default());
    let err = serve(addr, state).await.unwrap_err();

    assert!(matches!(err, SiteError::ServerBindError { .. }));
    assert!(err.to_string().contains(&addr.to_string()));
    assert_eq!(err.severity(), portfolio_site::utils::error::ErrorSeverity::Critical);
}
