//! Per-call parameters for the cryptographic operations.
//!
//! The service derives keys from these labels, so one identity can serve
//! several logical contexts. Nothing here is checked against the service;
//! the client only refuses empty labels.

use crate::error::{ClientError, Result};

/// Parameters for [`sign`](crate::IdentityServiceClient::sign).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignParams {
    /// Protocol tag, e.g. `"agent message"`.
    pub protocol: String,
}

impl SignParams {
    pub const DEFAULT_PROTOCOL: &'static str = "agent message";

    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_non_empty("protocol", &self.protocol)
    }
}

impl Default for SignParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROTOCOL)
    }
}

/// Context for [`encrypt`](crate::IdentityServiceClient::encrypt) and
/// [`decrypt`](crate::IdentityServiceClient::decrypt).
///
/// A ciphertext only decrypts under the same context it was sealed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoContext {
    pub protocol: String,
    pub key_id: String,
    /// `"self"` means the agent is encrypting for itself.
    pub counterparty: String,
}

impl CryptoContext {
    pub const DEFAULT_PROTOCOL: &'static str = "agent memory";
    pub const DEFAULT_KEY_ID: &'static str = "default";
    pub const SELF_COUNTERPARTY: &'static str = "self";

    pub fn new(
        protocol: impl Into<String>,
        key_id: impl Into<String>,
        counterparty: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            key_id: key_id.into(),
            counterparty: counterparty.into(),
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = key_id.into();
        self
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = counterparty.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        require_non_empty("protocol", &self.protocol)?;
        require_non_empty("key_id", &self.key_id)?;
        require_non_empty("counterparty", &self.counterparty)
    }
}

impl Default for CryptoContext {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_PROTOCOL,
            Self::DEFAULT_KEY_ID,
            Self::SELF_COUNTERPARTY,
        )
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClientError::Validation { field });
    }
    Ok(())
}
