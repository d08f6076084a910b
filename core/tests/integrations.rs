//! Integration-facade tests against a local stand-in for the automation
//! provider. The mock records every action invocation so the tests can
//! assert on the exact argument shapes sent downstream.

use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use voicedesk_core::{CalendarTools, ChatTools, Composio, MailTools};

#[derive(Clone)]
struct MockProvider {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    response: Value,
}

async fn execute_action(
    State(mock): State<MockProvider>,
    Path(action): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    mock.calls.lock().unwrap().push((action, body));
    Json(mock.response.clone())
}

/// Binds a mock provider on an ephemeral port and returns its base URL plus
/// the recorded calls.
async fn spawn_provider(response: Value) -> (String, Arc<Mutex<Vec<(String, Value)>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mock = MockProvider {
        calls: calls.clone(),
        response,
    };
    let router = Router::new()
        .route("/api/v3/tools/execute/{action}", post(execute_action))
        .with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}"), calls)
}

fn ok_response() -> Value {
    json!({ "successful": true, "data": { "ok": true } })
}

#[tokio::test]
async fn execute_parses_a_successful_provider_result() {
    let (base_url, _calls) = spawn_provider(json!({
        "successful": true,
        "data": { "messages": [] }
    }))
    .await;
    let composio = Composio::with_config(base_url, "test-key");

    let result = composio
        .execute("GMAIL_FETCH_EMAILS", "default", json!({}))
        .await
        .unwrap();
    assert!(result.successful);
    assert_eq!(result.data, Some(json!({ "messages": [] })));
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn fetch_emails_sends_the_verbose_payload_flags() {
    let (base_url, calls) = spawn_provider(ok_response()).await;
    let mail = MailTools::new(Arc::new(Composio::with_config(base_url, "test-key")));

    let result = mail.fetch_emails("default", 10).await;
    assert!(result.successful);

    let calls = calls.lock().unwrap();
    let (action, body) = &calls[0];
    assert_eq!(action, "GMAIL_FETCH_EMAILS");
    assert_eq!(body["user_id"], "default");
    assert_eq!(body["arguments"]["max_results"], 10);
    assert_eq!(body["arguments"]["include_payload"], true);
    assert_eq!(body["arguments"]["verbose"], true);
}

#[tokio::test]
async fn send_email_omits_absent_cc_and_bcc() {
    let (base_url, calls) = spawn_provider(ok_response()).await;
    let mail = MailTools::new(Arc::new(Composio::with_config(base_url, "test-key")));

    mail.send_email("default", "a@b.com", "Hi", "Body", Some("c@b.com"), None)
        .await;

    let calls = calls.lock().unwrap();
    let arguments = &calls[0].1["arguments"];
    assert_eq!(arguments["to"], "a@b.com");
    assert_eq!(arguments["cc"], "c@b.com");
    assert!(arguments.get("bcc").is_none());
}

#[tokio::test]
async fn create_event_wraps_times_and_attendees() {
    let (base_url, calls) = spawn_provider(ok_response()).await;
    let calendar = CalendarTools::new(Arc::new(Composio::with_config(base_url, "test-key")));

    calendar
        .create_event(
            "default",
            "Standup",
            "2026-09-01T09:00:00Z",
            "2026-09-01T09:30:00Z",
            Some(vec!["a@b.com".into(), "c@d.com".into()]),
            Some("Room 4"),
        )
        .await;

    let calls = calls.lock().unwrap();
    let (action, body) = &calls[0];
    assert_eq!(action, "GOOGLECALENDAR_CREATE_EVENT");
    let arguments = &body["arguments"];
    assert_eq!(arguments["start"], json!({ "dateTime": "2026-09-01T09:00:00Z" }));
    assert_eq!(arguments["end"], json!({ "dateTime": "2026-09-01T09:30:00Z" }));
    assert_eq!(
        arguments["attendees"],
        json!([{ "email": "a@b.com" }, { "email": "c@d.com" }])
    );
    assert_eq!(arguments["location"], "Room 4");
}

#[tokio::test]
async fn find_events_renames_query_to_q() {
    let (base_url, calls) = spawn_provider(ok_response()).await;
    let calendar = CalendarTools::new(Arc::new(Composio::with_config(base_url, "test-key")));

    calendar
        .find_events("default", Some("2026-09-01T00:00:00Z"), None, Some("standup"))
        .await;

    let calls = calls.lock().unwrap();
    let arguments = &calls[0].1["arguments"];
    assert_eq!(arguments["timeMin"], "2026-09-01T00:00:00Z");
    assert!(arguments.get("timeMax").is_none());
    assert_eq!(arguments["q"], "standup");
    assert!(arguments.get("query").is_none());
}

#[tokio::test]
async fn list_calendars_sends_an_empty_argument_bag() {
    let (base_url, calls) = spawn_provider(ok_response()).await;
    let calendar = CalendarTools::new(Arc::new(Composio::with_config(base_url, "test-key")));

    let result = calendar.list_calendars("alice").await;
    assert!(result.successful);

    let calls = calls.lock().unwrap();
    let (action, body) = &calls[0];
    assert_eq!(action, "GOOGLECALENDAR_LIST_CALENDARS");
    assert_eq!(body["user_id"], "alice");
    assert_eq!(body["arguments"], json!({}));
}

#[tokio::test]
async fn invite_to_channel_comma_joins_the_user_list() {
    let (base_url, calls) = spawn_provider(ok_response()).await;
    let chat = ChatTools::new(Arc::new(Composio::with_config(base_url, "test-key")));

    chat.invite_to_channel("default", "#general", &["u1".into(), "u2".into(), "u3".into()])
        .await;

    let calls = calls.lock().unwrap();
    let (action, body) = &calls[0];
    assert_eq!(action, "SLACK_INVITE_TO_CHANNEL");
    assert_eq!(body["arguments"]["users"], "u1,u2,u3");
}

#[tokio::test]
async fn create_channel_snake_cases_the_privacy_flag() {
    let (base_url, calls) = spawn_provider(ok_response()).await;
    let chat = ChatTools::new(Arc::new(Composio::with_config(base_url, "test-key")));

    chat.create_channel("default", "incidents", true).await;

    let calls = calls.lock().unwrap();
    let arguments = &calls[0].1["arguments"];
    assert_eq!(arguments["name"], "incidents");
    assert_eq!(arguments["is_private"], true);
    assert!(arguments.get("isPrivate").is_none());
}

#[tokio::test]
async fn unreachable_provider_becomes_a_failed_tool_result() {
    // Grab a port nobody is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mail = MailTools::new(Arc::new(Composio::with_config(
        format!("http://{addr}"),
        "test-key",
    )));
    let result = mail.fetch_emails("default", 10).await;
    assert!(!result.successful);
    let error = result.error.expect("error message");
    assert!(error.starts_with("Failed to fetch emails"), "{error}");
}

#[tokio::test]
async fn provider_error_status_becomes_a_failed_tool_result() {
    async fn reject() -> (axum::http::StatusCode, &'static str) {
        (axum::http::StatusCode::UNAUTHORIZED, "bad api key")
    }
    let router = Router::new().route("/api/v3/tools/execute/{action}", post(reject));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let chat = ChatTools::new(Arc::new(Composio::with_config(
        format!("http://{addr}"),
        "wrong-key",
    )));
    let result = chat.list_conversations("default").await;
    assert!(!result.successful);
    let error = result.error.expect("error message");
    assert!(error.contains("401"), "{error}");
}
