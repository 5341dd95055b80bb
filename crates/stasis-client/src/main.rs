//! Stasis Chess terminal client.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let url = std::env::var("SERVER_URL").unwrap_or_else(|_| "ws://127.0.0.1:8080".into());

    info!("Starting Stasis Chess client...");

    client::run_client(&url).await
}
