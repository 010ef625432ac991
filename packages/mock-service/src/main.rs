//! `agid-mock` — local stand-in for the AGIdentity service.
//!
//! # Quick start
//!
//! ```sh
//! # Default port, zero balance:
//! agid-mock
//!
//! # Custom bind address and balance:
//! AGID_MOCK_BIND=127.0.0.1:8080 AGID_MOCK_BALANCE=50000 agid-mock
//! ```
//!
//! # Environment variables
//!
//! See [`agidentity_mock::MockConfig`] for the full list.

use std::process;

use agidentity_mock::{build_router, AppState, MockConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agidentity_mock=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = MockConfig::from_env().unwrap_or_else(|e| fatal(&e.to_string()));
    let bind_addr = config.bind_addr;

    let state = AppState::new(config);
    tracing::info!("identity: {}", state.identity.public_key_hex());

    let app = build_router(state);

    tracing::info!("listening on {bind_addr}");
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .unwrap_or_else(|e| fatal(&format!("failed to bind {bind_addr}: {e}")));

    if let Err(e) = axum::serve(listener, app).await {
        fatal(&format!("server error: {e}"));
    }
}

/// Log an error and exit with code 1.
fn fatal(msg: &str) -> ! {
    tracing::error!("{msg}");
    eprintln!("agid-mock: {msg}");
    process::exit(1);
}
