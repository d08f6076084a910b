//! VoiceDesk gateway: the HTTP surface between the voice platform and the
//! integration facades.
//!
//! Every tool the assistant can invoke is one POST route here; all of them
//! funnel through [`dispatch::dispatch`], which owns the webhook contract
//! (call-id extraction, validation, timeout, envelope shaping).

pub mod api;
pub mod api_assistant;
pub mod api_calendar;
pub mod api_gmail;
pub mod api_slack;
pub mod dispatch;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use voicedesk_core::{CalendarTools, ChatTools, Composio, MailTools};

// Application State
// The facades all share one provider client; it is read-only after
// construction, so cloning the state per request is just Arc bumps.
#[derive(Clone)]
pub struct AppState {
    pub mail: Arc<MailTools>,
    pub calendar: Arc<CalendarTools>,
    pub chat: Arc<ChatTools>,
    /// Publicly reachable base URL prefixed onto every tool endpoint.
    pub public_base_url: String,
    /// Browser key handed to the voice platform SDK.
    pub vapi_public_key: String,
}

impl AppState {
    pub fn new(composio: Arc<Composio>, public_base_url: String, vapi_public_key: String) -> Self {
        Self {
            mail: Arc::new(MailTools::new(composio.clone())),
            calendar: Arc::new(CalendarTools::new(composio.clone())),
            chat: Arc::new(ChatTools::new(composio)),
            public_base_url,
            vapi_public_key,
        }
    }
}

/// Builds the full router. Kept out of `main` so tests can drive it
/// directly with `tower::ServiceExt`.
pub fn app(state: AppState) -> Router {
    // The session page is served from a different origin than the webhook
    // endpoints, so the config/assistant routes need open CORS.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/config", get(api_assistant::client_config))
        .route("/api/assistant", get(api_assistant::assistant_definition))
        .route("/api/tools/gmail/fetch-emails", post(api_gmail::fetch_emails))
        .route("/api/tools/gmail/send-email", post(api_gmail::send_email))
        .route("/api/tools/gmail/create-draft", post(api_gmail::create_draft))
        .route("/api/tools/calendar/create-event", post(api_calendar::create_event))
        .route("/api/tools/calendar/find-events", post(api_calendar::find_events))
        .route("/api/tools/calendar/find-free-slots", post(api_calendar::find_free_slots))
        .route("/api/tools/slack/send-message", post(api_slack::send_message))
        .route("/api/tools/slack/create-channel", post(api_slack::create_channel))
        .route("/api/tools/slack/list-conversations", post(api_slack::list_conversations))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "VoiceDesk Gateway: Operational"
}
