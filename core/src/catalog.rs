use serde_json::{json, Value};
use std::sync::OnceLock;

// The shape of our "Passport" (what the voice platform needs to call a tool)
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema property map, in declaration order. This is what the
    /// voice platform reads to know *how* to call the tool.
    pub properties: Value,
    /// Subset of `properties` keys the voice platform must always supply.
    pub required: &'static [&'static str],
    /// Local webhook path; the public base URL is prefixed at session start.
    pub endpoint: &'static str,
}

/// Per-call deadline advertised to the voice platform. Must match the
/// dispatch adapter's internal timeout, or the platform gives up on calls
/// the gateway still considers live.
pub const TOOL_TIMEOUT_SECONDS: u64 = 30;

static CATALOG: OnceLock<Vec<ToolDescriptor>> = OnceLock::new();

/// The full tool catalog, built once for the lifetime of the process.
pub fn catalog() -> &'static [ToolDescriptor] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Looks up a single descriptor by tool name.
pub fn get(name: &str) -> Option<&'static ToolDescriptor> {
    catalog().iter().find(|t| t.name == name)
}

/// Required parameter names for a tool; empty for unknown names so the
/// dispatcher can degrade to no validation rather than refuse the call.
pub fn required_params(name: &str) -> &'static [&'static str] {
    get(name).map(|t| t.required).unwrap_or(&[])
}

/// Serializes the catalog into the voice platform's function-tool format,
/// rewriting every endpoint against the publicly reachable base URL.
pub fn platform_tools(base_url: &str) -> Vec<Value> {
    let base = base_url.trim_end_matches('/');
    catalog()
        .iter()
        .map(|tool| {
            json!({
                "type": "function",
                "function": {
                    "name": tool.name,
                    "description": tool.description,
                    "parameters": {
                        "type": "object",
                        "properties": tool.properties,
                        "required": tool.required,
                    },
                },
                "server": {
                    "url": format!("{base}{}", tool.endpoint),
                    "timeoutSeconds": TOOL_TIMEOUT_SECONDS,
                },
            })
        })
        .collect()
}

fn user_id_property() -> Value {
    json!({
        "type": "string",
        "description": "User ID (default: \"default\")",
        "default": "default"
    })
}

fn build_catalog() -> Vec<ToolDescriptor> {
    vec![
        // Gmail Tools
        ToolDescriptor {
            name: "fetch_emails",
            description: "Fetch recent emails from Gmail inbox",
            properties: json!({
                "userId": user_id_property(),
                "maxResults": {
                    "type": "number",
                    "description": "Maximum number of emails to fetch (default: 10)",
                    "default": 10
                }
            }),
            required: &[],
            endpoint: "/api/tools/gmail/fetch-emails",
        },
        ToolDescriptor {
            name: "send_email",
            description: "Send an email via Gmail",
            properties: json!({
                "userId": user_id_property(),
                "to": { "type": "string", "description": "Email recipient address" },
                "subject": { "type": "string", "description": "Email subject line" },
                "body": { "type": "string", "description": "Email body content" },
                "cc": { "type": "string", "description": "CC recipients (optional)" },
                "bcc": { "type": "string", "description": "BCC recipients (optional)" }
            }),
            required: &["to", "subject", "body"],
            endpoint: "/api/tools/gmail/send-email",
        },
        ToolDescriptor {
            name: "create_email_draft",
            description: "Create a draft email in Gmail",
            properties: json!({
                "userId": user_id_property(),
                "to": { "type": "string", "description": "Email recipient address" },
                "subject": { "type": "string", "description": "Email subject line" },
                "body": { "type": "string", "description": "Email body content" }
            }),
            required: &["to", "subject", "body"],
            endpoint: "/api/tools/gmail/create-draft",
        },
        // Google Calendar Tools
        ToolDescriptor {
            name: "create_calendar_event",
            description: "Create a new event in Google Calendar",
            properties: json!({
                "userId": user_id_property(),
                "summary": { "type": "string", "description": "Event title/summary" },
                "startDateTime": { "type": "string", "description": "Event start time (ISO 8601 format)" },
                "endDateTime": { "type": "string", "description": "Event end time (ISO 8601 format)" },
                "attendees": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "List of attendee email addresses"
                },
                "location": { "type": "string", "description": "Event location" }
            }),
            required: &["summary", "startDateTime", "endDateTime"],
            endpoint: "/api/tools/calendar/create-event",
        },
        ToolDescriptor {
            name: "find_calendar_events",
            description: "Search for events in Google Calendar",
            properties: json!({
                "userId": user_id_property(),
                "timeMin": { "type": "string", "description": "Start time for search (ISO 8601 format)" },
                "timeMax": { "type": "string", "description": "End time for search (ISO 8601 format)" },
                "query": { "type": "string", "description": "Search query for event titles" }
            }),
            required: &[],
            endpoint: "/api/tools/calendar/find-events",
        },
        ToolDescriptor {
            name: "find_free_time_slots",
            description: "Find available time slots in Google Calendar",
            properties: json!({
                "userId": user_id_property(),
                "timeMin": { "type": "string", "description": "Start time for search (ISO 8601 format)" },
                "timeMax": { "type": "string", "description": "End time for search (ISO 8601 format)" },
                "duration": {
                    "type": "number",
                    "description": "Duration in minutes (default: 60)",
                    "default": 60
                }
            }),
            required: &["timeMin", "timeMax"],
            endpoint: "/api/tools/calendar/find-free-slots",
        },
        // Slack Tools
        ToolDescriptor {
            name: "send_slack_message",
            description: "Send a message to a Slack channel or user",
            properties: json!({
                "userId": user_id_property(),
                "channel": {
                    "type": "string",
                    "description": "Slack channel ID or name (e.g., #general, C1234567890, @username)"
                },
                "text": { "type": "string", "description": "Message text to send" },
                "threadTs": {
                    "type": "string",
                    "description": "Thread timestamp for replying to a specific message"
                }
            }),
            required: &["channel", "text"],
            endpoint: "/api/tools/slack/send-message",
        },
        ToolDescriptor {
            name: "create_slack_channel",
            description: "Create a new Slack channel",
            properties: json!({
                "userId": user_id_property(),
                "name": { "type": "string", "description": "Channel name (without # prefix)" },
                "isPrivate": {
                    "type": "boolean",
                    "description": "Whether the channel should be private (default: false)",
                    "default": false
                }
            }),
            required: &["name"],
            endpoint: "/api/tools/slack/create-channel",
        },
        ToolDescriptor {
            name: "list_slack_conversations",
            description: "List all accessible Slack conversations/channels",
            properties: json!({
                "userId": user_id_property()
            }),
            required: &[],
            endpoint: "/api/tools/slack/list-conversations",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_nine_tools_with_unique_names() {
        let names: HashSet<_> = catalog().iter().map(|t| t.name).collect();
        assert_eq!(catalog().len(), 9);
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn required_params_are_declared_properties() {
        for tool in catalog() {
            let properties = tool.properties.as_object().expect("properties object");
            for param in tool.required {
                assert!(
                    properties.contains_key(*param),
                    "tool '{}' requires undeclared parameter '{}'",
                    tool.name,
                    param
                );
            }
        }
    }

    #[test]
    fn endpoints_live_under_the_tools_prefix() {
        for tool in catalog() {
            assert!(
                tool.endpoint.starts_with("/api/tools/"),
                "tool '{}' has endpoint '{}'",
                tool.name,
                tool.endpoint
            );
        }
    }

    #[test]
    fn required_params_lookup_is_empty_for_unknown_tools() {
        assert!(required_params("no_such_tool").is_empty());
        assert_eq!(required_params("send_email"), &["to", "subject", "body"]);
    }

    #[test]
    fn platform_tools_rewrite_endpoints_and_advertise_the_timeout() {
        let tools = platform_tools("https://example.ngrok.app/");
        assert_eq!(tools.len(), 9);
        for tool in &tools {
            let url = tool["server"]["url"].as_str().unwrap();
            assert!(url.starts_with("https://example.ngrok.app/api/tools/"), "{url}");
            assert_eq!(tool["server"]["timeoutSeconds"], 30);
            assert_eq!(tool["type"], "function");
            assert!(tool["function"]["parameters"]["properties"].is_object());
        }
    }
}
