use crate::api::{InboundToolCallEnvelope, ResponseEnvelope, ToolCallResult};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};
use voicedesk_core::{catalog, ToolResult, TOOL_TIMEOUT_SECONDS};

/// Hard deadline for a single tool invocation. The catalog advertises the
/// same figure to the voice platform, so the platform and the adapter give
/// up together.
pub const HANDLER_TIMEOUT: Duration = Duration::from_secs(TOOL_TIMEOUT_SECONDS);

pub type ToolResponse = (StatusCode, Json<ResponseEnvelope>);

/// The single chokepoint every tool handler passes through.
///
/// Unwraps the webhook body, fails fast when no traceable call id exists,
/// rejects missing required parameters before anything downstream runs,
/// races the handler against [`HANDLER_TIMEOUT`], and shapes whatever comes
/// out into exactly one response envelope. Handlers return `ToolResult`
/// data, never errors, so there is no exception interpretation here.
pub async fn dispatch<F, Fut>(raw_body: &[u8], tool_name: &str, handler: F) -> ToolResponse
where
    F: FnOnce(Map<String, Value>) -> Fut,
    Fut: Future<Output = ToolResult>,
{
    // 1. Parse the webhook body
    let envelope: InboundToolCallEnvelope = match serde_json::from_slice(raw_body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(tool = tool_name, "unparseable webhook body: {e}");
            return error_response(
                "error",
                &format!("invalid request body: {e}"),
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    };

    // 2. Never call a downstream integration without a call id to echo back
    let Some((tool_call_id, arguments)) = envelope.into_first_call() else {
        warn!(tool = tool_name, "webhook carried no toolCallId");
        return error_response("unknown", "No toolCallId provided", StatusCode::BAD_REQUEST);
    };
    info!(tool = tool_name, %tool_call_id, "dispatching tool call");

    // 3. Required-parameter check, per the catalog descriptor
    for param in catalog::required_params(tool_name) {
        if !arguments.contains_key(*param) {
            warn!(tool = tool_name, %tool_call_id, param, "missing required parameter");
            return error_response(
                &tool_call_id,
                &format!("Missing required parameter: {param}"),
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    }

    // 4. Race the handler against the deadline. Dropping the future on
    // timeout cancels the in-flight provider request, but the remote side
    // effect may already have happened.
    let result = match tokio::time::timeout(HANDLER_TIMEOUT, handler(arguments)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                tool = tool_name,
                %tool_call_id,
                "tool call exceeded {}s deadline",
                HANDLER_TIMEOUT.as_secs()
            );
            return error_response(
                &tool_call_id,
                "Request timed out",
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    };

    success_response(&tool_call_id, result)
}

fn envelope(tool_call_id: &str, result: String) -> Json<ResponseEnvelope> {
    Json(ResponseEnvelope {
        results: vec![ToolCallResult {
            tool_call_id: tool_call_id.to_string(),
            result,
        }],
    })
}

fn error_response(tool_call_id: &str, error: &str, status: StatusCode) -> ToolResponse {
    (status, envelope(tool_call_id, format!("Error: {error}")))
}

fn success_response(tool_call_id: &str, result: ToolResult) -> ToolResponse {
    if result.successful {
        match serde_json::to_string(&result.data.unwrap_or(Value::Null)) {
            Ok(data) => (StatusCode::OK, envelope(tool_call_id, data)),
            Err(e) => error_response(
                "error",
                &format!("failed to serialize tool data: {e}"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        }
    } else {
        // A downstream failure is still a well-formed 200 envelope; the
        // platform speaks the embedded message back to the user.
        let message = result.error.unwrap_or_else(|| "Unknown error".to_string());
        (StatusCode::OK, envelope(tool_call_id, format!("Error: {message}")))
    }
}
