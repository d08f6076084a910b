use crate::api::{arg_str, arg_str_list, arg_u64, user_id};
use crate::dispatch::{dispatch, ToolResponse};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;

/// POST /api/tools/calendar/create-event
pub async fn create_event(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "create_calendar_event", |args| async move {
        let user = user_id(&args);
        let summary = arg_str(&args, "summary").unwrap_or_default();
        let start = arg_str(&args, "startDateTime").unwrap_or_default();
        let end = arg_str(&args, "endDateTime").unwrap_or_default();
        let attendees = arg_str_list(&args, "attendees");
        let location = arg_str(&args, "location");
        state
            .calendar
            .create_event(&user, &summary, &start, &end, attendees, location.as_deref())
            .await
    })
    .await
}

/// POST /api/tools/calendar/find-events
pub async fn find_events(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "find_calendar_events", |args| async move {
        let user = user_id(&args);
        let time_min = arg_str(&args, "timeMin");
        let time_max = arg_str(&args, "timeMax");
        let query = arg_str(&args, "query");
        state
            .calendar
            .find_events(&user, time_min.as_deref(), time_max.as_deref(), query.as_deref())
            .await
    })
    .await
}

/// POST /api/tools/calendar/find-free-slots
pub async fn find_free_slots(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "find_free_time_slots", |args| async move {
        let user = user_id(&args);
        let time_min = arg_str(&args, "timeMin").unwrap_or_default();
        let time_max = arg_str(&args, "timeMax").unwrap_or_default();
        let duration = arg_u64(&args, "duration").unwrap_or(60);
        state
            .calendar
            .find_free_slots(&user, &time_min, &time_max, duration)
            .await
    })
    .await
}
