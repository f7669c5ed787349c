use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Fixed inter-candidate delay for batch evaluation, in milliseconds.
    pub batch_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gateway_url: require_env("GATEWAY_URL")?,
            gateway_api_key: require_env("GATEWAY_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            batch_delay_ms: std::env::var("BATCH_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse::<u64>()
                .context("BATCH_DELAY_MS must be a number of milliseconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
