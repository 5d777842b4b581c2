// config.rs
use std::time::Duration;

use url::Url;

use crate::errors::ZooplaError;
use crate::request::BASE_URL;
use crate::transport::DEFAULT_TIMEOUT;

pub const API_KEY_VAR: &str = "ZOOPLA_API_KEY";
pub const BASE_URL_VAR: &str = "ZOOPLA_BASE_URL";
pub const TIMEOUT_VAR: &str = "ZOOPLA_TIMEOUT_SECS";

/// Everything the client needs from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ZooplaError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup` so tests need not touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ZooplaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ZooplaError::Config(format!("{API_KEY_VAR} environment variable not set"))
            })?;

        let base = lookup(BASE_URL_VAR).unwrap_or_else(|| BASE_URL.to_string());
        let base_url = Url::parse(&base)
            .map_err(|e| ZooplaError::Config(format!("{BASE_URL_VAR} is not a valid URL: {e}")))?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| ZooplaError::Config(format!("{TIMEOUT_VAR}={raw:?}: {e}")))?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}
