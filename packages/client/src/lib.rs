//! Blocking client for the AGIdentity identity and cryptography service.
//!
//! The service holds the agent's keys; this crate only speaks its HTTP API.
//! Every operation is one request and one typed response:
//!
//! ```no_run
//! use agidentity_client::{ClientConfig, CryptoContext, IdentityServiceClient, SignParams};
//!
//! let client = IdentityServiceClient::new(ClientConfig::default())?;
//!
//! let identity = client.get_identity()?;
//! let sig = client.sign("hello", &SignParams::default())?;
//!
//! let ctx = CryptoContext::default().with_key_id("notes");
//! let sealed = client.encrypt("my secret memory", &ctx)?;
//! let opened = client.decrypt(&sealed.ciphertext, &ctx)?;
//! assert_eq!(opened.plaintext, "my secret memory");
//! # Ok::<(), agidentity_client::ClientError>(())
//! ```
//!
//! Calls block the current thread. Do not call them from inside an async
//! runtime worker; use `spawn_blocking` there.

pub mod client;
pub mod config;
pub mod error;
pub mod params;

pub use agidentity_api as api;
pub use agidentity_api::{
    BalanceResponse, DecryptResponse, EncryptResponse, IdentityResponse, SignResponse,
};
pub use client::IdentityServiceClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, MAX_TIMEOUT};
pub use error::{ClientError, Result};
pub use params::{CryptoContext, SignParams};
