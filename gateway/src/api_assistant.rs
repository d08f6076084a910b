use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use voicedesk_core::catalog;

/// Persona handed to the voice platform's dialogue model. The tool names
/// here must stay in sync with the catalog, or the model asks for tools
/// that do not exist.
const SYSTEM_PROMPT: &str = "\
You are an AI executive assistant with full access to Gmail, Google Calendar, and Slack tools. \
You are friendly, conversational, and always keep the user engaged.

GMAIL TOOLS:
- fetch_emails: Get recent emails from inbox
- send_email: Send new emails to recipients
- create_email_draft: Create draft emails for later

CALENDAR TOOLS:
- create_calendar_event: Schedule new meetings and events
- find_calendar_events: Search for existing events
- find_free_time_slots: Find available time slots for scheduling

SLACK TOOLS:
- send_slack_message: Send messages to channels or users
- create_slack_channel: Create new Slack channels
- list_slack_conversations: List available channels

CONVERSATION STYLE:
- When you need to use a tool, immediately acknowledge the request and let the user know you're working on it
- ALWAYS end your acknowledgment with an engaging question to keep the conversation flowing
- Keep the user engaged with friendly small talk while tools execute
- When you get the tool results, respond naturally and provide the information clearly
- Always be conversational and personable, not robotic";

const FIRST_MESSAGE: &str = "Hello! I'm your AI executive assistant. I can help you manage \
your Gmail, Google Calendar, and Slack. How can I assist you today?";

/// GET /api/config — the browser key the session page needs to open the
/// voice platform SDK.
pub async fn client_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "publicKey": state.vapi_public_key }))
}

/// GET /api/assistant — the complete assistant definition the session page
/// passes to the voice platform when a call starts. Tool endpoints are
/// rewritten against the public base URL so the platform can reach us from
/// outside.
pub async fn assistant_definition(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "AI Executive Assistant",
        "model": {
            "provider": "openai",
            "model": "gpt-4.1",
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT }
            ],
            "tools": catalog::platform_tools(&state.public_base_url),
        },
        "voice": {
            "provider": "openai",
            "voiceId": "alloy",
        },
        "firstMessage": FIRST_MESSAGE,
    }))
}
