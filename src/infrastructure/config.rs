use crate::domain::session::DEFAULT_REFRESH_COOKIE;
use anyhow::Context;
use std::env;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the authentication backend, e.g. `https://auth.example.com`.
    pub api_base_url: String,
    pub port: u16,
    pub refresh_cookie_name: String,
    pub http_timeout_secs: u64,
    pub rate_limit_per_minute: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;

        Ok(Self {
            api_base_url,
            port: parse_var("PORT", 3000),
            refresh_cookie_name: env::var("REFRESH_COOKIE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REFRESH_COOKIE.to_string()),
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", 30),
            rate_limit_per_minute: parse_var("RATE_LIMIT_PER_MINUTE", 60).max(1),
        })
    }

    pub fn for_backend(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            port: 3000,
            refresh_cookie_name: DEFAULT_REFRESH_COOKIE.to_string(),
            http_timeout_secs: 30,
            rate_limit_per_minute: 60,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
