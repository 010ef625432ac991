//! Service identity — Ed25519 keypair.
//!
//! A fresh keypair is generated at startup and held for the life of the
//! process, so `publicKey` is stable across calls but not across restarts.
//!
//! Signatures cover `protocol || 0x00 || message`. Binding the protocol tag
//! into the signed bytes means a signature made under one protocol never
//! verifies under another.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;

/// The mock agent's signing identity.
pub struct MockIdentity {
    signing_key: SigningKey,
}

impl MockIdentity {
    /// Generate a fresh identity using OS randomness.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Restore an identity from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// The 32-byte verifying key, hex-encoded.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().as_bytes())
    }

    /// Sign `message` under `protocol`; returns the 64-byte signature as hex.
    pub fn sign(&self, protocol: &str, message: &str) -> String {
        let sig = self.signing_key.sign(&signing_input(protocol, message));
        hex::encode(sig.to_bytes())
    }
}

/// Check a hex signature produced by [`MockIdentity::sign`].
///
/// Returns `false` for any malformed input rather than an error.
pub fn verify_signature(
    public_key_hex: &str,
    protocol: &str,
    message: &str,
    signature_hex: &str,
) -> bool {
    let Some(key) = decode_array::<32>(public_key_hex)
        .and_then(|bytes| VerifyingKey::from_bytes(&bytes).ok())
    else {
        return false;
    };
    let Some(sig) = decode_array::<64>(signature_hex) else {
        return false;
    };
    key.verify(&signing_input(protocol, message), &Signature::from_bytes(&sig))
        .is_ok()
}

fn signing_input(protocol: &str, message: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(protocol.len() + 1 + message.len());
    bytes.extend_from_slice(protocol.as_bytes());
    bytes.push(0);
    bytes.extend_from_slice(message.as_bytes());
    bytes
}

fn decode_array<const N: usize>(s: &str) -> Option<[u8; N]> {
    hex::decode(s).ok()?.try_into().ok()
}
