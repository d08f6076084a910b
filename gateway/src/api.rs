use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Input: what the voice platform POSTs to a tool endpoint
#[derive(Debug, Deserialize)]
pub struct InboundToolCallEnvelope {
    pub message: Option<ToolCallMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallMessage {
    pub tool_call_list: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl InboundToolCallEnvelope {
    /// Pulls out the call id and argument bag. Only the first entry of
    /// `toolCallList` is honored; additional entries are silently ignored.
    /// Returns `None` when there is no usable call id (absent list, empty
    /// list, or an empty-string id).
    pub fn into_first_call(self) -> Option<(String, Map<String, Value>)> {
        let mut list = self.message?.tool_call_list?;
        if list.is_empty() {
            return None;
        }
        let call = list.swap_remove(0);
        if call.id.is_empty() {
            return None;
        }
        Some((call.id, call.arguments))
    }
}

// Output: the envelope the voice platform expects back, always with exactly
// one results entry
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub results: Vec<ToolCallResult>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub tool_call_id: String,
    /// Either the JSON-serialized `data` of a successful result, or the
    /// literal `"Error: <message>"` the platform speaks back to the user.
    pub result: String,
}

// --- ARGUMENT NARROWING ---
// Best-effort accessors for the untyped argument bag. Wrong types read as
// absent and fall back to the tool's defaults.

pub fn arg_str(args: &Map<String, Value>, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}

pub fn arg_u64(args: &Map<String, Value>, key: &str) -> Option<u64> {
    args.get(key).and_then(Value::as_u64)
}

pub fn arg_bool(args: &Map<String, Value>, key: &str) -> Option<bool> {
    args.get(key).and_then(Value::as_bool)
}

pub fn arg_str_list(args: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    args.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

/// Resolves the scoping identity; there is no multi-tenant user model, so a
/// missing (or empty) `userId` means the single implicit `"default"` account.
pub fn user_id(args: &Map<String, Value>) -> String {
    arg_str(args, "userId")
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| "default".to_string())
}
