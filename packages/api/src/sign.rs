//! Message signing — `POST /api/sign`.

use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// Body of `POST /api/sign`.
///
/// The protocol tag selects the signing context on the service side, so the
/// same identity can sign for unrelated purposes without key reuse across
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignRequest {
    pub message: String,
    pub protocol: String,
}

/// Response of `POST /api/sign`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignResponse {
    /// The signature, as encoded by the service.
    pub signature: String,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl SignResponse {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            extra: ExtraFields::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shape() {
        let req = SignRequest {
            message: "hello".into(),
            protocol: "agent message".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, serde_json::json!({"message": "hello", "protocol": "agent message"}));
    }

    #[test]
    fn response_requires_signature() {
        assert!(serde_json::from_str::<SignResponse>("{}").is_err());
        let r: SignResponse = serde_json::from_str(r#"{"signature":"3045"}"#).unwrap();
        assert_eq!(r.signature, "3045");
    }
}
