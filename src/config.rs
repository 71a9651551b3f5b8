//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::time::Duration;

use crate::constants::{scan, service};
use crate::error::{Error, Result};

/// Configuration for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host of the library service
    pub host: String,
    /// Port of the library service
    pub port: u16,
    /// How many tracks from the start of the listing to inspect
    pub scan_limit: usize,
    /// Snippet length reported for a match, in characters
    pub snippet_chars: usize,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: service::DEFAULT_HOST.to_string(),
            port: service::DEFAULT_PORT,
            scan_limit: scan::DEFAULT_SCAN_LIMIT,
            snippet_chars: scan::DEFAULT_SNIPPET_CHARS,
            request_timeout: Duration::from_secs(service::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Numeric values that fail to parse keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("LIBRARY_HOST") {
            let host = host.trim();
            if host.is_empty() {
                return Err(Error::config(
                    "LIBRARY_HOST is set but empty",
                    "Unset it to use localhost or give a host name",
                ));
            }
            config.host = host.to_string();
        }

        if let Some(port) = lookup("LIBRARY_PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
            config.port = port;
        }

        if let Some(limit) = lookup("SCAN_LIMIT").and_then(|l| l.trim().parse::<usize>().ok()) {
            config.scan_limit = limit;
        }

        if let Some(chars) = lookup("SNIPPET_CHARS").and_then(|c| c.trim().parse::<usize>().ok()) {
            config.snippet_chars = chars;
        }

        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS").and_then(|s| s.trim().parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Base URL of the library service, without a trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_service_constants() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.scan_limit, 20);
        assert_eq!(config.snippet_chars, 200);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("LIBRARY_HOST", "music.lan"),
            ("LIBRARY_PORT", "8080"),
            ("SCAN_LIMIT", "0"),
            ("SNIPPET_CHARS", "50"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "http://music.lan:8080");
        assert_eq!(config.scan_limit, 0);
        assert_eq!(config.snippet_chars, 50);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparseable_numbers_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("LIBRARY_PORT", "70000"),
            ("SCAN_LIMIT", "lots"),
        ]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.scan_limit, 20);
    }

    #[test]
    fn empty_host_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("LIBRARY_HOST", "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
