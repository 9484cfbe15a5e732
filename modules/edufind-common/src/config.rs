use std::env;
use std::time::Duration;

use crate::error::{EduFindError, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Search provider
    pub serper_api_key: Option<String>,
    /// Override for the provider endpoint; the client's default applies when unset.
    pub serper_base_url: Option<String>,
    pub search_page_size: usize,
    pub search_timeout: Duration,

    // Web server
    pub api_host: String,
    pub api_port: u16,

    // CORS
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// A missing `SERPER_API_KEY` is not an error here: the server still starts
    /// and every search reports the missing credential instead.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            serper_api_key: lookup("SERPER_API_KEY").filter(|k| !k.trim().is_empty()),
            serper_base_url: lookup("SERPER_BASE_URL").filter(|u| !u.trim().is_empty()),
            search_page_size: parse_positive(&lookup, "SEARCH_PAGE_SIZE", 20)?,
            search_timeout: Duration::from_secs(parse_positive(
                &lookup,
                "SEARCH_TIMEOUT_SECS",
                30,
            )?),
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: parse_or(&lookup, "API_PORT", 8000)?,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| EduFindError::Config(format!("{key} must be a number, got {raw:?}"))),
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let value = parse_or(lookup, key, default)?;
    if value <= T::default() {
        return Err(EduFindError::Config(format!("{key} must be greater than zero")));
    }
    Ok(value)
}
