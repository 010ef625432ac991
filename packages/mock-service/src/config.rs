//! Mock service configuration, populated from environment variables.

use std::net::SocketAddr;

use thiserror::Error;

/// A variable was set but could not be parsed.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime configuration for the mock service.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `AGID_MOCK_BIND` | `127.0.0.1:3000` | TCP socket address to listen on |
/// | `AGID_MOCK_BALANCE` | `0` | Satoshis reported by `/api/balance` |
#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    pub bind_addr: SocketAddr,
    pub balance: u64,
}

impl MockConfig {
    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("AGID_MOCK_BIND") {
            config.bind_addr = raw.parse().map_err(|_| ConfigError::Invalid {
                var: "AGID_MOCK_BIND",
                expected: "a socket address (e.g. 127.0.0.1:3000)",
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup("AGID_MOCK_BALANCE") {
            config.balance = raw.parse().map_err(|_| ConfigError::Invalid {
                var: "AGID_MOCK_BALANCE",
                expected: "a non-negative integer",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            balance: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = MockConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, MockConfig::default());
        assert_eq!(cfg.bind_addr.port(), 3000);
    }

    #[test]
    fn reads_overrides() {
        let cfg = MockConfig::from_lookup(|var| match var {
            "AGID_MOCK_BIND" => Some("0.0.0.0:8080".into()),
            "AGID_MOCK_BALANCE" => Some("42000".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.balance, 42_000);
    }

    #[test]
    fn negative_balance_is_an_error() {
        let err = MockConfig::from_lookup(|var| {
            (var == "AGID_MOCK_BALANCE").then(|| "-5".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "AGID_MOCK_BALANCE", .. }));
    }
}
