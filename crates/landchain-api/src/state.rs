//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The ledger is constructed once at service start and injected here; there
//! is no process-wide ledger variable. Handlers reach it only through
//! [`AppState::chain`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use landchain_core::HashChain;
use thiserror::Error;

/// Log output format selected at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Errors while reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        /// Environment variable name.
        var: &'static str,
        /// The raw value.
        value: String,
        /// Parse failure detail.
        reason: String,
    },
}

/// Application configuration.
///
/// Custom `Debug` redacts the `admin_token` to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: IpAddr,
    /// Port to bind the HTTP listener to.
    pub port: u16,
    /// Bearer token guarding `/clear_blockchain`. `None` leaves it open.
    pub admin_token: Option<String>,
    /// Preload the sample records at start-up.
    pub seed_sample_data: bool,
    /// Log output format.
    pub log_format: LogFormat,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("port", &self.port)
            .field(
                "admin_token",
                &self.admin_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("seed_sample_data", &self.seed_sample_data)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            admin_token: None,
            seed_sample_data: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// `BIND_ADDR`, `PORT`, `ADMIN_TOKEN`, `SEED_SAMPLE_DATA`, `LOG_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| {
                ConfigError::Invalid {
                    var: "BIND_ADDR",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ConfigError::Invalid {
                    var: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        let admin_token = lookup("ADMIN_TOKEN").filter(|t| !t.is_empty());

        let seed_sample_data = lookup("SEED_SAMPLE_DATA")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_sample_data);

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            bind_addr,
            port,
            admin_token,
            seed_sample_data,
            log_format,
        })
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ledger.
    pub chain: Arc<HashChain>,
    /// Runtime configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state with an empty ledger and default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create state with an empty ledger and the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_chain(Arc::new(HashChain::new()), config)
    }

    /// Create state around an existing ledger.
    pub fn with_chain(chain: Arc<HashChain>, config: AppConfig) -> Self {
        Self {
            chain,
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert!(config.admin_token.is_none());
        assert!(!config.seed_sample_data);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "8088"),
            ("ADMIN_TOKEN", "s3cret"),
            ("SEED_SAMPLE_DATA", "TRUE"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8088");
        assert_eq!(config.admin_token.as_deref(), Some("s3cret"));
        assert!(config.seed_sample_data);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn empty_admin_token_disables_auth() {
        let config = AppConfig::from_lookup(lookup(&[("ADMIN_TOKEN", "")])).unwrap();
        assert!(config.admin_token.is_none());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn debug_redacts_admin_token() {
        let config = AppConfig {
            admin_token: Some("super-secret".into()),
            ..AppConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn state_clones_share_the_ledger() {
        let state = AppState::new();
        let clone = state.clone();
        clone
            .chain
            .append(landchain_core::NewRecord::new("n", "u", 1, "l"))
            .unwrap();
        assert_eq!(state.chain.len(), 1);
    }
}
