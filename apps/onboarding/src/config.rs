use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the wizard runs out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Size cap for resume documents, in megabytes.
    pub resume_max_mb: u64,
    /// Size cap for profile photos, in megabytes.
    pub photo_max_mb: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resume_max_mb: env_u64("RESUME_MAX_MB", 10)?,
            photo_max_mb: env_u64("PHOTO_MAX_MB", 2)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a positive integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
