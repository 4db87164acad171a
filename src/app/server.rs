use crate::adapters::preference::CookiePreferenceStore;
use crate::app::page::{render_page, PageView};
use crate::core::form::ContactForm;
use crate::core::relay::ContactRelay;
use crate::core::theme::{ThemeController, ThemeState};
use crate::domain::model::{ContactSubmission, Profile};
use crate::domain::ports::PreferenceStore;
use crate::utils::error::{Result, SiteError};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use maud::Markup;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn ContactRelay>,
    pub profile: Arc<Profile>,
}

impl AppState {
    pub fn new(relay: Arc<dyn ContactRelay>, profile: Profile) -> Self {
        Self {
            relay,
            profile: Arc::new(profile),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/contact", post(submit_contact_form))
        .route("/api/contact", post(submit_contact_json))
        .route("/theme", post(toggle_theme))
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::ServerBindError {
            addr: addr.to_string(),
            source,
        })?;
    tracing::info!("🌐 Portfolio site listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    menu: Option<String>,
}

fn current_theme(headers: &HeaderMap) -> ThemeState {
    ThemeState::from_stored(CookiePreferenceStore::from_headers(headers).load().as_deref())
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Markup {
    let form = ContactForm::new();
    render_page(&PageView {
        profile: &state.profile,
        theme: current_theme(&headers),
        menu_open: query.menu.as_deref() == Some("open"),
        form: &form,
        notification: None,
    })
}

async fn submit_contact_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<ContactSubmission>,
) -> Response {
    let mut form = ContactForm::with_fields(submission);
    let notification = form.submit(state.relay.as_ref()).await;
    let status = match &notification {
        Some(n) if n.is_error() => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };

    let page = render_page(&PageView {
        profile: &state.profile,
        theme: current_theme(&headers),
        menu_open: false,
        form: &form,
        notification: notification.as_ref(),
    });

    (status, page).into_response()
}

async fn submit_contact_json(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    match state.relay.relay(&submission).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "success": false,
                "error": e.user_friendly_message(),
            })),
        )
            .into_response(),
    }
}

async fn toggle_theme(headers: HeaderMap) -> Response {
    let mut controller = ThemeController::mount(CookiePreferenceStore::from_headers(&headers));
    controller.toggle();

    let redirect = Redirect::to("/");
    match controller.into_store().set_cookie_header() {
        Some(cookie) => ([(header::SET_COOKIE, cookie)], redirect).into_response(),
        None => redirect.into_response(),
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}
