//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_TITLE: &str = "School Testing API";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("cannot resolve HOST {host:?}: {reason}")]
    Unresolvable { host: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP literal or hostname; resolved when binding.
    pub host: String,
    pub port: u16,
    /// Allow cross-origin API calls from any origin.
    pub cors_allow_any: bool,
    /// Title published in the OpenAPI document.
    pub api_title: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: IP address or hostname, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `CORS_ALLOW_ANY`: default false
    /// - `API_TITLE`: default `School Testing API`
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = host_or_default(std::env::var("HOST").ok());
        let port = parse_var("PORT", &DEFAULT_PORT.to_string())?;
        let cors_allow_any = env_bool("CORS_ALLOW_ANY").unwrap_or(false);
        let api_title = std::env::var("API_TITLE")
            .ok()
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_API_TITLE.to_owned());

        Ok(Self { host, port, cors_allow_any, api_title })
    }

    /// Resolve `host:port` to the first socket address it names.
    pub async fn resolve_bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let unresolvable = |reason: String| ConfigError::Unresolvable { host: self.host.clone(), reason };
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| unresolvable(e.to_string()))?
            .next()
            .ok_or_else(|| unresolvable("no addresses".to_owned()))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            cors_allow_any: false,
            api_title: DEFAULT_API_TITLE.to_owned(),
        }
    }
}

fn host_or_default(raw: Option<String>) -> String {
    raw.map(|h| h.trim().to_owned())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_owned())
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_owned());
    raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value: raw })
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
