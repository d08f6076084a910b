use crate::api::{arg_str, arg_u64, user_id};
use crate::dispatch::{dispatch, ToolResponse};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;

/// POST /api/tools/gmail/fetch-emails
pub async fn fetch_emails(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "fetch_emails", |args| async move {
        let user = user_id(&args);
        let max_results = arg_u64(&args, "maxResults").unwrap_or(10);
        state.mail.fetch_emails(&user, max_results).await
    })
    .await
}

/// POST /api/tools/gmail/send-email
pub async fn send_email(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "send_email", |args| async move {
        let user = user_id(&args);
        let to = arg_str(&args, "to").unwrap_or_default();
        let subject = arg_str(&args, "subject").unwrap_or_default();
        let email_body = arg_str(&args, "body").unwrap_or_default();
        let cc = arg_str(&args, "cc");
        let bcc = arg_str(&args, "bcc");
        state
            .mail
            .send_email(&user, &to, &subject, &email_body, cc.as_deref(), bcc.as_deref())
            .await
    })
    .await
}

/// POST /api/tools/gmail/create-draft
pub async fn create_draft(State(state): State<AppState>, body: Bytes) -> ToolResponse {
    dispatch(&body, "create_email_draft", |args| async move {
        let user = user_id(&args);
        let to = arg_str(&args, "to").unwrap_or_default();
        let subject = arg_str(&args, "subject").unwrap_or_default();
        let email_body = arg_str(&args, "body").unwrap_or_default();
        state.mail.create_draft(&user, &to, &subject, &email_body).await
    })
    .await
}
