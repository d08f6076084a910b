use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use voicedesk_core::{catalog, Composio};
use voicedesk_gateway::{app, AppState};

#[tokio::main]
async fn main() {
    // 1. Logging Setup
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .compact()
        .init();

    info!("VoiceDesk Gateway Initializing...");
    dotenvy::dotenv().ok();

    // 2. Connect the Automation Provider (The Hands)
    let composio = match Composio::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => panic!("CRITICAL: Failed to initialize Composio client: {e:#}"),
    };

    // 3. Session Configuration (what the voice platform needs to reach us)
    let public_base_url =
        std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let vapi_public_key = std::env::var("VAPI_PUBLIC_KEY").unwrap_or_default();
    info!(
        "Serving {} tools behind {}",
        catalog().len(),
        public_base_url
    );

    // 4. Bundle State & Routes
    let state = AppState::new(composio, public_base_url, vapi_public_key);
    let router = app(state);

    // 5. Start Server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let listener = TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    info!("Gateway listening on port {port}...");

    axum::serve(listener, router).await.unwrap();
}
