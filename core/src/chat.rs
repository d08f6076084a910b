use crate::client::{Composio, ToolResult};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Slack operations.
pub struct ChatTools {
    composio: Arc<Composio>,
}

impl ChatTools {
    pub fn new(composio: Arc<Composio>) -> Self {
        Self { composio }
    }

    pub async fn send_message(
        &self,
        user_id: &str,
        channel: &str,
        text: &str,
        thread_ts: Option<&str>,
    ) -> ToolResult {
        let mut args = Map::new();
        args.insert("channel".into(), json!(channel));
        args.insert("text".into(), json!(text));
        if let Some(thread_ts) = thread_ts {
            args.insert("thread_ts".into(), json!(thread_ts));
        }
        match self
            .composio
            .execute("SLACK_SEND_MESSAGE", user_id, Value::Object(args))
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to send Slack message: {e:#}")),
        }
    }

    pub async fn create_channel(&self, user_id: &str, name: &str, is_private: bool) -> ToolResult {
        let args = json!({
            "name": name,
            "is_private": is_private,
        });
        match self
            .composio
            .execute("SLACK_CREATE_CHANNEL", user_id, args)
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to create Slack channel: {e:#}")),
        }
    }

    pub async fn list_conversations(&self, user_id: &str) -> ToolResult {
        match self
            .composio
            .execute("SLACK_LIST_CONVERSATIONS", user_id, json!({}))
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to list Slack conversations: {e:#}")),
        }
    }

    pub async fn invite_to_channel(&self, user_id: &str, channel: &str, users: &[String]) -> ToolResult {
        // The provider takes the invitee list as one comma-joined string.
        let args = json!({
            "channel": channel,
            "users": users.join(","),
        });
        match self
            .composio
            .execute("SLACK_INVITE_TO_CHANNEL", user_id, args)
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to invite users to Slack channel: {e:#}")),
        }
    }
}
