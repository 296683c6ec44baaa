mod config;
mod errors;
mod experience;
mod interview;
mod notify;
mod profile;
mod skills;
mod state;
mod ui;
mod upload;
mod wizard;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::notify::TerminalNotifier;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (falls back to defaults for anything unset)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Twin onboarding v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Upload limits: resume {}MB, photo {}MB",
        config.resume_max_mb, config.photo_max_mb
    );

    // Build app state
    let state = AppState {
        config,
        notifier: Arc::new(TerminalNotifier),
    };

    ui::run(state).await
}
