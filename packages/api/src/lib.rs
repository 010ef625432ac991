//! Request and response types for the AGIdentity HTTP API.
//!
//! This crate encodes the wire contract of the identity service as Rust
//! types. Both the client and the mock service depend on it, so the two
//! sides cannot drift apart silently.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `/api/identity` | → [`IdentityResponse`] |
//! | POST | `/api/sign` | [`SignRequest`] → [`SignResponse`] |
//! | POST | `/api/encrypt` | [`EncryptRequest`] → [`EncryptResponse`] |
//! | POST | `/api/decrypt` | [`DecryptRequest`] → [`DecryptResponse`] |
//! | GET | `/api/balance` | → [`BalanceResponse`] |
//!
//! Failures on any endpoint carry an [`ErrorResponse`] body.

pub mod balance;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod sign;

pub use balance::BalanceResponse;
pub use crypto::{DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse};
pub use error::ErrorResponse;
pub use identity::IdentityResponse;
pub use sign::{SignRequest, SignResponse};

/// Endpoint paths, relative to the service base URL.
pub mod paths {
    pub const IDENTITY: &str = "/api/identity";
    pub const SIGN: &str = "/api/sign";
    pub const ENCRYPT: &str = "/api/encrypt";
    pub const DECRYPT: &str = "/api/decrypt";
    pub const BALANCE: &str = "/api/balance";
}

/// Fields a response carried beyond the ones this crate names.
///
/// Kept so callers can still reach data a newer service version adds.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
