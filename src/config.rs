//! Gateway configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PROBE_PATH: &str = "/api/auth";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL: {0} (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("invalid probe path: {0} (must start with '/')")]
    InvalidProbePath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub probe_path: String,
    pub timeouts: Timeouts,
}

impl GatewayConfig {
    /// Config for `base_url` with default probe path and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL is http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            probe_path: DEFAULT_PROBE_PATH.to_owned(),
            timeouts: Timeouts::default(),
        })
    }

    /// Build typed gateway config from environment variables.
    ///
    /// Optional:
    /// - `ROLEGATE_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `ROLEGATE_PROBE_PATH`: default `/api/auth`
    /// - `ROLEGATE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ROLEGATE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the base URL or probe path is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("ROLEGATE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let probe_path = std::env::var("ROLEGATE_PROBE_PATH").unwrap_or_else(|_| DEFAULT_PROBE_PATH.to_owned());
        let timeouts = Timeouts {
            request_secs: env_parse_u64("ROLEGATE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("ROLEGATE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self::new(&base_url)?.with_probe_path(&probe_path).map(|cfg| cfg.with_timeouts(timeouts))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL is http(s).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProbePath`] unless the path is absolute.
    pub fn with_probe_path(mut self, probe_path: &str) -> Result<Self, ConfigError> {
        let trimmed = probe_path.trim();
        if !trimmed.starts_with('/') {
            return Err(ConfigError::InvalidProbePath(probe_path.to_owned()));
        }
        self.probe_path = trimmed.to_owned();
        Ok(self)
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidBaseUrl(raw.to_owned()))?;
    if host.is_empty() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
