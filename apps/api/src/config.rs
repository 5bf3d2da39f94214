use std::path::PathBuf;

use anyhow::{Context, Result};

/// Seconds each question stays open once an answer window starts.
pub const DEFAULT_QUESTION_TIME_LIMIT: u32 = 120;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the built single-page app (index.html + assets).
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            rust_log: "info".to_string(),
            static_dir: PathBuf::from("dist"),
        }
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "3000".to_string())
        .trim()
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
