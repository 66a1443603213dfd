//! Application configuration
//!
//! Loaded from environment variables (a `.env` file is read at startup).

use anyhow::{bail, Context, Result};

/// Default bound on model round-trips per turn
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host for the HTTP server
    pub host: String,
    /// Bind port for the HTTP server
    pub port: u16,
    /// Model override for all personas (provider default otherwise)
    pub model: Option<String>,
    /// Maximum model round-trips per turn
    pub max_round_trips: usize,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Recognized variables: `HTTP_SERVER_HOST`, `HTTP_SERVER_PORT`,
    /// `LLM_MODEL`, `MAX_AGENT_TURNS`. The LLM provider reads its own
    /// `OPENAI_*` variables.
    pub fn from_env() -> Result<Self> {
        let host =
            std::env::var("HTTP_SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match std::env::var("HTTP_SERVER_PORT") {
            Ok(value) => value
                .parse()
                .context("HTTP_SERVER_PORT must be a port number")?,
            Err(_) => 8080,
        };

        let model = std::env::var("LLM_MODEL").ok().filter(|m| !m.is_empty());

        let max_round_trips = match std::env::var("MAX_AGENT_TURNS") {
            Ok(value) => parse_max_turns(&value)?,
            Err(_) => DEFAULT_MAX_TURNS,
        };

        Ok(Self {
            host,
            port,
            model,
            max_round_trips,
        })
    }
}

/// Parse the `MAX_AGENT_TURNS` value; it must be a positive integer
fn parse_max_turns(value: &str) -> Result<usize> {
    let parsed: i64 = value
        .parse()
        .context("MAX_AGENT_TURNS must be a positive integer")?;
    if parsed <= 0 {
        bail!("MAX_AGENT_TURNS must be a positive integer");
    }
    Ok(parsed as usize)
}
