use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Hosted endpoint of the automation provider.
pub const DEFAULT_BASE_URL: &str = "https://backend.composio.dev";

/// Result shape the provider returns for every executed action. When
/// `successful` is true, `data` is authoritative and `error` is ignored;
/// otherwise `error` carries the human-readable cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            successful: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Client for the managed automation provider (Composio).
///
/// Constructed once at startup and shared behind an `Arc`; it is never
/// mutated afterwards, so concurrent use needs no locking. The provider
/// holds the OAuth credentials for the user's real accounts; we only hold
/// its API key.
pub struct Composio {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Composio {
    /// Builds the client from the environment (`COMPOSIO_API_KEY`, and an
    /// optional `COMPOSIO_BASE_URL` override).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("COMPOSIO_API_KEY")
            .context("COMPOSIO_API_KEY must be set in .env")?;
        let base_url = std::env::var("COMPOSIO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        info!("Composio client ready. Endpoint: {}", base_url);
        Ok(Self::with_config(base_url, api_key))
    }

    pub fn with_config(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Executes one named action on behalf of `user_id`.
    ///
    /// This is the single downstream call every tool funnels into. No
    /// retries: a failure here is terminal for the request, and the facades
    /// turn it into `ToolResult` data rather than letting it propagate.
    pub async fn execute(&self, action: &str, user_id: &str, arguments: Value) -> Result<ToolResult> {
        let url = format!("{}/api/v3/tools/execute/{}", self.base_url, action);
        info!(action, user_id, "executing provider action");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&serde_json::json!({
                "user_id": user_id,
                "arguments": arguments,
            }))
            .send()
            .await
            .with_context(|| format!("request to provider failed for '{action}'"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("provider returned {status} for '{action}': {body}");
        }

        response
            .json::<ToolResult>()
            .await
            .with_context(|| format!("provider returned an unreadable body for '{action}'"))
    }
}
