//! HTTP endpoints
//!
//! The webhook speaks the Twilio WhatsApp dialect: inbound messages
//! arrive as form-encoded POSTs, replies go back as TwiML. Whatever
//! happens inside, the platform gets a 200 with a message body, since a 5xx
//! would surface as a dead chat to the customer.

use axum::{
    extract::{Form, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use commerce_bot_core::Language;

use crate::metrics::{metrics_handler, record_handler_error, record_inbound};
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.settings.server.cors_origins);

    Router::new()
        .route("/webhook", post(webhook))
        .route("/webhook", get(verify_webhook))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!(origin = %origin, "invalid CORS origin");
                None
            })
        })
        .collect();

    if parsed.is_empty() {
        return CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Inbound Twilio webhook payload (form-encoded)
#[derive(Debug, Deserialize, Default)]
pub struct TwilioWebhook {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "ProfileName", default)]
    pub profile_name: Option<String>,
    #[serde(rename = "NumMedia", default)]
    pub num_media: Option<String>,
}

impl TwilioWebhook {
    fn has_media(&self) -> bool {
        self.num_media
            .as_deref()
            .and_then(|n| n.parse::<u32>().ok())
            .map(|n| n > 0)
            .unwrap_or(false)
    }
}

/// Main webhook: one inbound message, one TwiML reply
pub async fn webhook(
    State(state): State<AppState>,
    Form(payload): Form<TwilioWebhook>,
) -> impl IntoResponse {
    record_inbound();
    tracing::info!(
        from = %payload.from,
        profile = payload.profile_name.as_deref().unwrap_or("unknown"),
        chars = payload.body.len(),
        "inbound message"
    );

    let reply = handle_inbound(&state, &payload).await.unwrap_or_else(|e| {
        record_handler_error();
        tracing::error!("webhook handler failed: {e}");
        state
            .agent
            .templates()
            .set(Language::English)
            .error_reply
            .clone()
    });

    twiml_response(&reply)
}

async fn handle_inbound(
    state: &AppState,
    payload: &TwilioWebhook,
) -> Result<String, crate::ServerError> {
    let session = state
        .sessions
        .get_or_create(&payload.from, || state.agent.new_session())?;

    let mut chat = session.chat.lock().await;

    if payload.has_media() {
        let language = chat.effective_language();
        return Ok(state
            .agent
            .templates()
            .set(language)
            .media_unsupported
            .clone());
    }

    Ok(state.agent.handle_message(&mut chat, &payload.body).await)
}

/// TwiML envelope around a reply
fn twiml_response(message: &str) -> impl IntoResponse {
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        xml_escape(message)
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml")],
        body,
    )
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Webhook verification (Twilio issues a GET during setup)
async fn verify_webhook() -> &'static str {
    "Webhook verified successfully"
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "sessions": state.sessions.count(),
        "products": state.agent.search_engine().index().len(),
    }))
}
