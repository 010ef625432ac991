//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Where the service listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Upper bound on a single request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest accepted timeout. The HTTP client adds the timeout to the
/// current instant, which overflows for durations near `u64::MAX` seconds.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Settings fixed at client construction.
///
/// | Field | Default |
/// |-------|---------|
/// | `base_url` | [`DEFAULT_BASE_URL`] |
/// | `timeout` | [`DEFAULT_TIMEOUT`] |
/// | `user_agent` | `agidentity-client/<crate version>` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root, without a trailing slash. Endpoint paths are appended.
    pub base_url: String,

    /// Per-request timeout. Must be non-zero and at most [`MAX_TIMEOUT`].
    pub timeout: Duration,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full URL for an endpoint path such as `/api/sign`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the settings before any request goes out.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("base URL {:?} is not valid: {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "base URL {:?} must use http or https",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig("timeout must be non-zero".into()));
        }
        if self.timeout > MAX_TIMEOUT {
            return Err(ClientError::InvalidConfig(format!(
                "timeout {:?} exceeds the maximum of {:?}",
                self.timeout, MAX_TIMEOUT
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("agidentity-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, "http://localhost:3000");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert!(cfg.user_agent.starts_with("agidentity-client/"));
        cfg.validate().unwrap();
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let cfg = ClientConfig::new("http://agent.local:8080//");
        assert_eq!(cfg.base_url, "http://agent.local:8080");
        assert_eq!(cfg.endpoint("/api/sign"), "http://agent.local:8080/api/sign");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://agent.local").validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_relative_url() {
        let err = ClientConfig::new("localhost:3000/api").validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_overflowing_timeout() {
        let err = ClientConfig::new("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(u64::MAX))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn max_timeout_is_accepted() {
        ClientConfig::default()
            .with_timeout(MAX_TIMEOUT)
            .validate()
            .unwrap();
        let err = ClientConfig::default()
            .with_timeout(MAX_TIMEOUT + Duration::from_millis(1))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
