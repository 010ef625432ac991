//! Symmetric encryption — `POST /api/encrypt` and `POST /api/decrypt`.
//!
//! Both requests carry the same context triple: protocol tag, key identifier
//! and counterparty. A ciphertext only decrypts under the exact triple it
//! was produced with.

use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// Body of `POST /api/encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncryptRequest {
    pub data: String,
    pub protocol: String,
    pub key_id: String,
    pub counterparty: String,
}

/// Response of `POST /api/encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncryptResponse {
    /// Opaque ciphertext; pass it back unchanged to `/api/decrypt`.
    pub ciphertext: String,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl EncryptResponse {
    pub fn new(ciphertext: impl Into<String>) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            extra: ExtraFields::new(),
        }
    }
}

/// Body of `POST /api/decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    pub ciphertext: String,
    pub protocol: String,
    pub key_id: String,
    pub counterparty: String,
}

/// Response of `POST /api/decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecryptResponse {
    pub plaintext: String,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl DecryptResponse {
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self {
            plaintext: plaintext.into(),
            extra: ExtraFields::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encrypt_request_uses_key_id_camel_case() {
        let req = EncryptRequest {
            data: "secret".into(),
            protocol: "agent memory".into(),
            key_id: "default".into(),
            counterparty: "self".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "data": "secret",
                "protocol": "agent memory",
                "keyId": "default",
                "counterparty": "self"
            })
        );
    }

    #[test]
    fn decrypt_request_shape() {
        let req = DecryptRequest {
            ciphertext: "ab12".into(),
            protocol: "agent memory".into(),
            key_id: "k1".into(),
            counterparty: "self".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["ciphertext"], "ab12");
        assert_eq!(v["keyId"], "k1");
        assert!(v.get("key_id").is_none());
    }

    #[test]
    fn decrypt_response_requires_plaintext() {
        assert!(serde_json::from_str::<DecryptResponse>(r#"{"ciphertext":"x"}"#).is_err());
    }
}
