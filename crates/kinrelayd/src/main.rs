//! kinrelay daemon - kintone webhook to Chatwork relay

use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::Result;
use kinrelay_chat::ChatworkNotifier;
use kinrelay_core::Config;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod handlers;
mod server;

use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinrelayd=info,kinrelay_chat=info,kinrelay_ai=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("kinrelay daemon starting...");

    // Missing chat credentials are fatal; missing AI keys only disable
    // the AI organizer further down.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let notifier = Arc::new(ChatworkNotifier::new(
        config.chatwork.api_token.clone(),
        config.chatwork.room_id.clone(),
    ));

    // Non-fatal; surfaces bad credentials in the log at startup
    match notifier.test_connection().await {
        Ok(()) => info!("Chatwork connection verified"),
        Err(e) => warn!("Chatwork connection test failed: {}", e),
    }

    let port = config.port;
    let state = AppState::new(config, notifier);
    let app = server::create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    info!("Health check: http://localhost:{}/health", port);
    info!("Webhook URL: http://localhost:{}/webhook/kintone", port);

    // Set up signal handlers
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;

    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down...");
        }
    }

    info!("Shutdown complete");
    Ok(())
}
