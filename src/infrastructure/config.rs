//! Kiosk configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

pub const BACKEND_URL_VAR: &str = "KIOSK_BACKEND_URL";
pub const RESET_SECS_VAR: &str = "KIOSK_RESET_SECS";
pub const REQUEST_TIMEOUT_SECS_VAR: &str = "KIOSK_REQUEST_TIMEOUT_SECS";
pub const LOG_DIR_VAR: &str = "KIOSK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} is not a whole number of seconds")]
    InvalidSeconds { key: &'static str, value: String },
}

/// Runtime settings for one kiosk.
#[derive(Debug, Clone, PartialEq)]
pub struct KioskConfig {
    /// Base URL of the check-in backend, without a trailing slash.
    pub backend_url: String,
    /// How long the success screen stays up before the flow resets.
    pub reset_delay: Duration,
    /// Upper bound on each backend request.
    pub request_timeout: Duration,
    /// Directory that receives `kiosk.log`.
    pub log_dir: PathBuf,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            reset_delay: Duration::from_secs(8),
            request_timeout: Duration::from_secs(10),
            log_dir: PathBuf::from("."),
        }
    }
}

impl KioskConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the defaults for unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend_url = get(BACKEND_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.backend_url);

        let reset_delay = match get(RESET_SECS_VAR) {
            Some(value) => parse_seconds(RESET_SECS_VAR, value)?,
            None => defaults.reset_delay,
        };

        let request_timeout = match get(REQUEST_TIMEOUT_SECS_VAR) {
            Some(value) => parse_seconds(REQUEST_TIMEOUT_SECS_VAR, value)?,
            None => defaults.request_timeout,
        };

        let log_dir = get(LOG_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.log_dir);

        Ok(Self {
            backend_url,
            reset_delay,
            request_timeout,
            log_dir,
        })
    }
}

fn parse_seconds(key: &'static str, value: String) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(ConfigError::InvalidSeconds { key, value }),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = KioskConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, KioskConfig::default());
        assert_eq!(config.backend_url, "http://localhost:5000");
        assert_eq!(config.reset_delay, Duration::from_secs(8));
    }

    #[test]
    fn test_overrides() {
        let config = KioskConfig::from_lookup(lookup_from(&[
            (BACKEND_URL_VAR, "https://checkin.example.com/"),
            (RESET_SECS_VAR, "15"),
            (REQUEST_TIMEOUT_SECS_VAR, "3"),
            (LOG_DIR_VAR, "/var/log/kiosk"),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "https://checkin.example.com");
        assert_eq!(config.reset_delay, Duration::from_secs(15));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/kiosk"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config =
            KioskConfig::from_lookup(lookup_from(&[(BACKEND_URL_VAR, "  "), (RESET_SECS_VAR, "")]))
                .unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.reset_delay, Duration::from_secs(8));
    }

    #[test]
    fn test_invalid_seconds_rejected() {
        let err = KioskConfig::from_lookup(lookup_from(&[(RESET_SECS_VAR, "eight")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSeconds {
                key: RESET_SECS_VAR,
                value: "eight".to_string(),
            }
        );
    }
}
