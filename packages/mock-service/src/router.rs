//! Assembles the Axum [`Router`] from all handler modules.

use agidentity_api::paths;
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    error::AppError,
    handlers::{balance, crypto, identity, AppState},
};

/// Build the complete application router with shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(paths::IDENTITY, get(identity::get_identity))
        .route(paths::SIGN, post(identity::sign))
        .route(paths::ENCRYPT, post(crypto::encrypt))
        .route(paths::DECRYPT, post(crypto::decrypt))
        .route(paths::BALANCE, get(balance::get_balance))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no endpoint at {}", uri.path()))
}
