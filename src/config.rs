use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "API_KEY";
pub const TIMEZONE_VAR: &str = "TIMEZONE";
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Export {0} first")]
    MissingVar(&'static str),
    #[error("{var} has an invalid value: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Credentials and request settings, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub timezone: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timezone: timezone.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Read the configuration from the environment, honouring a `.env` file
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let timezone = lookup(TIMEZONE_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(TIMEZONE_VAR))?;

        let mut config = Self::new(api_key, timezone);
        if let Some(raw) = lookup(REQUEST_TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                var: REQUEST_TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_reads_required_vars() {
        let config =
            Config::from_lookup(lookup_from(&[("API_KEY", "abc"), ("TIMEZONE", "Africa/Casablanca")]))
                .unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.timezone, "Africa/Casablanca");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup_from(&[("TIMEZONE", "UTC")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("API_KEY")));
        assert_eq!(err.to_string(), "Export API_KEY first");
    }

    #[test]
    fn test_empty_timezone_counts_as_missing() {
        let err =
            Config::from_lookup(lookup_from(&[("API_KEY", "abc"), ("TIMEZONE", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("TIMEZONE")));
    }

    #[test]
    fn test_timeout_override() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "abc"),
            ("TIMEZONE", "UTC"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        let err = Config::from_lookup(lookup_from(&[
            ("API_KEY", "abc"),
            ("TIMEZONE", "UTC"),
            ("REQUEST_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { .. }));
    }
}
