use crate::api::{arg_bool, arg_str, user_id};
use crate::dispatch::{dispatch, ToolResponse};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;

/// POST /api/tools/slack/send-message
pub async fn send_message(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "send_slack_message", |args| async move {
        let user = user_id(&args);
        let channel = arg_str(&args, "channel").unwrap_or_default();
        let text = arg_str(&args, "text").unwrap_or_default();
        let thread_ts = arg_str(&args, "threadTs");
        state
            .chat
            .send_message(&user, &channel, &text, thread_ts.as_deref())
            .await
    })
    .await
}

/// POST /api/tools/slack/create-channel
pub async fn create_channel(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "create_slack_channel", |args| async move {
        let user = user_id(&args);
        let name = arg_str(&args, "name").unwrap_or_default();
        let is_private = arg_bool(&args, "isPrivate").unwrap_or(false);
        state.chat.create_channel(&user, &name, is_private).await
    })
    .await
}

/// POST /api/tools/slack/list-conversations
pub async fn list_conversations(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "list_slack_conversations", |args| async move {
        let user = user_id(&args);
        state.chat.list_conversations(&user).await
    })
    .await
}
