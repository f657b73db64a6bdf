use anyhow::{Context, Result};

use crate::errors::env_context;

const USERNAME_VAR: &str = "CHESS_USERNAME";
const API_BASE_VAR: &str = "CHESS_API_BASE";
const TIMEOUT_VAR: &str = "CHESS_HTTP_TIMEOUT_SECS";
const SYSTEM_PROXY_VAR: &str = "CHESS_HTTP_USE_SYSTEM_PROXY";

#[derive(Debug, Clone)]
pub struct ChessSettings {
    pub username: String,
    pub api_base_url: String,
}

impl Default for ChessSettings {
    fn default() -> Self {
        Self {
            username: "kevin_on".to_string(),
            api_base_url: "https://api.chess.com/pub/player".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub use_system_proxy: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "ChessRatingDelta/0.1".to_string(),
            timeout_secs: 30,
            use_system_proxy: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub chess: ChessSettings,
    pub http: HttpSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            chess: ChessSettings::default(),
            http: HttpSettings::default(),
        }
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(username) = lookup(USERNAME_VAR) {
            config.chess.username = username;
        }
        if let Some(base) = lookup(API_BASE_VAR) {
            config.chess.api_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            config.http.timeout_secs = timeout
                .trim()
                .parse()
                .with_context(|| env_context(TIMEOUT_VAR))?;
        }
        if let Some(use_proxy) = lookup(SYSTEM_PROXY_VAR) {
            config.http.use_system_proxy = use_proxy
                .trim()
                .parse()
                .with_context(|| env_context(SYSTEM_PROXY_VAR))?;
        }

        Ok(config)
    }
}
