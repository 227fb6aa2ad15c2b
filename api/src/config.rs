use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Deployment-time settings. None of these change the API contract.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout: Duration::from_secs(10),
            max_concurrent_requests: 1024,
            log_format: LogFormat::Compact,
        }
    }
}

impl Config {
    /// Reads `.env` (if any) and the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse(&lookup, "PORT")?.unwrap_or(defaults.port),
            request_timeout: parse(&lookup, "REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_concurrent_requests: parse(&lookup, "MAX_CONCURRENT_REQUESTS")?
                .unwrap_or(defaults.max_concurrent_requests),
            log_format: parse(&lookup, "LOG_FORMAT")?.unwrap_or(defaults.log_format),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_listen_on_port_5000() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:5000");
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("MAX_CONCURRENT_REQUESTS", "16"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.max_concurrent_requests, 16);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), r#"invalid value for PORT: "http""#);
    }
}
