use crate::client::{Composio, ToolResult};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Google Calendar operations.
pub struct CalendarTools {
    composio: Arc<Composio>,
}

impl CalendarTools {
    pub fn new(composio: Arc<Composio>) -> Self {
        Self { composio }
    }

    pub async fn create_event(
        &self,
        user_id: &str,
        summary: &str,
        start_date_time: &str,
        end_date_time: &str,
        attendees: Option<Vec<String>>,
        location: Option<&str>,
    ) -> ToolResult {
        let mut args = Map::new();
        args.insert("summary".into(), json!(summary));
        // The provider wants start/end wrapped in dateTime objects and
        // attendees as { email } objects, not plain addresses.
        args.insert("start".into(), json!({ "dateTime": start_date_time }));
        args.insert("end".into(), json!({ "dateTime": end_date_time }));
        if let Some(attendees) = attendees {
            let attendees: Vec<Value> = attendees
                .iter()
                .map(|email| json!({ "email": email }))
                .collect();
            args.insert("attendees".into(), Value::Array(attendees));
        }
        if let Some(location) = location {
            args.insert("location".into(), json!(location));
        }
        match self
            .composio
            .execute("GOOGLECALENDAR_CREATE_EVENT", user_id, Value::Object(args))
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to create calendar event: {e:#}")),
        }
    }

    pub async fn list_calendars(&self, user_id: &str) -> ToolResult {
        match self
            .composio
            .execute("GOOGLECALENDAR_LIST_CALENDARS", user_id, json!({}))
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to list calendars: {e:#}")),
        }
    }

    pub async fn find_events(
        &self,
        user_id: &str,
        time_min: Option<&str>,
        time_max: Option<&str>,
        query: Option<&str>,
    ) -> ToolResult {
        let mut args = Map::new();
        if let Some(time_min) = time_min {
            args.insert("timeMin".into(), json!(time_min));
        }
        if let Some(time_max) = time_max {
            args.insert("timeMax".into(), json!(time_max));
        }
        if let Some(query) = query {
            args.insert("q".into(), json!(query));
        }
        match self
            .composio
            .execute("GOOGLECALENDAR_FIND_EVENT", user_id, Value::Object(args))
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to find events: {e:#}")),
        }
    }

    pub async fn find_free_slots(
        &self,
        user_id: &str,
        time_min: &str,
        time_max: &str,
        duration: u64,
    ) -> ToolResult {
        let args = json!({
            "timeMin": time_min,
            "timeMax": time_max,
            "duration": duration,
        });
        match self
            .composio
            .execute("GOOGLECALENDAR_FIND_FREE_SLOTS", user_id, args)
            .await
        {
            Ok(result) => result,
            Err(e) => ToolResult::failure(format!("Failed to find free slots: {e:#}")),
        }
    }
}
