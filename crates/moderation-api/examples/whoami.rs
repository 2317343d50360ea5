//! Show the logged-in account and its chats.
//!
//! Run with: cargo run --example whoami
//!
//! Reads `MODERATION_API_URL` (and the other `MODERATION_*` variables) from the
//! environment or a `.env` file. If `MODERATION_EMAIL` and `MODERATION_PASSWORD`
//! are set it logs in first; otherwise it reuses the persisted token.
//!
//! Examples:
//!   MODERATION_API_URL=http://localhost:8000 \
//!   MODERATION_EMAIL=owner@example.com MODERATION_PASSWORD=hunter22 \
//!   cargo run --example whoami

use moderation_api::{ApiClient, ClientConfig, LoginRequest};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "Connecting to moderation backend");
    let client = ApiClient::new(config)?;

    if let (Ok(email), Ok(password)) = (env::var("MODERATION_EMAIL"), env::var("MODERATION_PASSWORD")) {
        client.auth().login(&LoginRequest::new(email, password)).await?;
    } else if !client.tokens().has_token() {
        println!("No stored token; set MODERATION_EMAIL and MODERATION_PASSWORD to log in.");
        return Ok(());
    }

    let me = client.auth().me().await?;
    println!("Logged in as {} ({})", me.email, me.id);

    for chat in client.chats().list().await? {
        println!(
            "  {} ai_check={} links={} emojis={}",
            chat.display_title(),
            chat.enable_ai_check,
            chat.cleanup_links,
            chat.cleanup_emojis
        );
    }

    Ok(())
}
