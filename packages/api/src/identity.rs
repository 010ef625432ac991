//! Identity lookup — `GET /api/identity`.

use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// The agent's public cryptographic identity.
///
/// ```json
/// { "publicKey": "02a1b2c3..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    /// The agent's public key, as encoded by the service (typically hex).
    pub public_key: String,

    /// Any other fields the service included.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl IdentityResponse {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            extra: ExtraFields::new(),
        }
    }
}
