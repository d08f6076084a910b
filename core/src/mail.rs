use crate::client::{Composio, ToolResult};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Gmail operations. Each method issues exactly one named provider action
/// and converts any client error into a failed `ToolResult`.
pub struct MailTools {
    composio: Arc<Composio>,
}

impl MailTools {
    pub fn new(composio: Arc<Composio>) -> Self {
        Self { composio }
    }

    pub async fn fetch_emails(&self, user_id: &str, max_results: u64) -> ToolResult {
        let args = json!({
            "max_results": max_results,
            "include_payload": true,
            "verbose": true,
        });
        match self.composio.execute("GMAIL_FETCH_EMAILS", user_id, args).await {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to fetch emails: {e:#}")),
        }
    }

    pub async fn send_email(
        &self,
        user_id: &str,
        to: &str,
        subject: &str,
        body: &str,
        cc: Option<&str>,
        bcc: Option<&str>,
    ) -> ToolResult {
        let mut args = Map::new();
        args.insert("to".into(), json!(to));
        args.insert("subject".into(), json!(subject));
        args.insert("body".into(), json!(body));
        if let Some(cc) = cc {
            args.insert("cc".into(), json!(cc));
        }
        if let Some(bcc) = bcc {
            args.insert("bcc".into(), json!(bcc));
        }
        match self
            .composio
            .execute("GMAIL_SEND_EMAIL", user_id, Value::Object(args))
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to send email: {e:#}")),
        }
    }

    pub async fn create_draft(&self, user_id: &str, to: &str, subject: &str, body: &str) -> ToolResult {
        // The draft action additionally wants the scoping identity inside
        // the argument payload itself.
        let args = json!({
            "to": to,
            "subject": subject,
            "body": body,
            "user_id": user_id,
        });
        match self
            .composio
            .execute("GMAIL_CREATE_EMAIL_DRAFT", user_id, args)
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to create draft: {e:#}")),
        }
    }
}
