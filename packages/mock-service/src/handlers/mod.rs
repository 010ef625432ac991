//! HTTP request handlers for the mock identity service.
//!
//! Handlers are pure async functions that receive Axum extractors and
//! return `Result<Json<_>, AppError>`. JSON bodies are taken as
//! `Result<Json<T>, JsonRejection>` so malformed input maps to the
//! `invalid_json` error code rather than Axum's plain-text rejection.

pub mod balance;
pub mod crypto;
pub mod identity;

use std::sync::Arc;

use crate::{config::MockConfig, identity::MockIdentity, vault::Vault};

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub config: MockConfig,
    pub identity: Arc<MockIdentity>,
    pub vault: Arc<Vault>,
}

impl AppState {
    /// State with a freshly generated identity and an empty vault.
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            identity: Arc::new(MockIdentity::generate()),
            vault: Arc::new(Vault::new()),
        }
    }
}
