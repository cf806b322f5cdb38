//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidHost { var: &'static str, value: String },
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
    #[error("invalid {var}: {value:?} is not a boolean")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, log_filter: DEFAULT_LOG_FILTER.to_owned(), log_json: false }
    }
}

impl ServerConfig {
    /// Build typed config from process environment variables.
    ///
    /// Optional:
    /// - `CRM_HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `RUST_LOG`: tracing filter, default `info`
    /// - `CRM_LOG_JSON`: `1/true/yes/on` or `0/false/no/off`, default off
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable that is set but
    /// unparsable. Blank values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match get("CRM_HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost { var: "CRM_HOST", value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let log_filter = get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        let log_json = match get("CRM_LOG_JSON") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "CRM_LOG_JSON", value: raw })?,
            None => false,
        };

        Ok(Self { host, port, log_filter, log_json })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
