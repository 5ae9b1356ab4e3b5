//! Host configuration from the process environment.
//!
//! `.env` is loaded best-effort by `main` before this runs; Leptos reads its
//! own `LEPTOS_*` variables separately through `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("ASSET_API_UPSTREAM must start with http:// or https://, got `{0}`")]
    InvalidUpstream(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend that `/api/*` is forwarded to; `None` disables the proxy.
    pub upstream: Option<String>,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup so tests need not touch the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let upstream = lookup("ASSET_API_UPSTREAM")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|raw| !raw.is_empty());
        if let Some(url) = &upstream {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUpstream(url.clone()));
            }
        }

        Ok(Self { port, upstream })
    }
}
