//! Public surface for the `agidentity-mock` crate.
//!
//! Exposes the router builder and a thread-hosted server so that external
//! crates (e.g. the conformance test suite) can run the service in-process
//! without spawning a subprocess.

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod router;
pub mod vault;

use std::io;
use std::net::TcpListener;

use axum::Router;

pub use config::{ConfigError, MockConfig};
pub use handlers::AppState;
pub use identity::{verify_signature, MockIdentity};
pub use router::build_router;

/// A mock service running on a background thread.
pub struct MockServer {
    /// e.g. `http://127.0.0.1:51234`
    pub base_url: String,
    pub state: AppState,
}

/// Start the mock service on an ephemeral `127.0.0.1` port.
///
/// The server runs on its own thread with a private tokio runtime, so
/// blocking HTTP clients may be used against it from ordinary `#[test]`
/// functions. It lives until the process exits.
pub fn spawn_blocking_server(config: MockConfig) -> io::Result<MockServer> {
    let state = AppState::new(config);
    let base_url = serve_on_thread(build_router(state.clone()))?;
    Ok(MockServer { base_url, state })
}

/// Serve an arbitrary router on an ephemeral `127.0.0.1` port from a
/// background thread and return its base URL.
///
/// The socket is bound before this returns, so requests issued immediately
/// afterwards queue in the backlog instead of being refused.
pub fn serve_on_thread(router: Router) -> io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    listener.set_nonblocking(true)?;
    let addr = listener.local_addr()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name(format!("agid-mock-{}", addr.port()))
        .spawn(move || {
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(listener) {
                    Ok(l) => l,
                    Err(e) => {
                        tracing::error!("failed to register listener on {addr}: {e}");
                        return;
                    }
                };
                if let Err(e) = axum::serve(listener, router).await {
                    tracing::error!("mock server on {addr} stopped: {e}");
                }
            });
        })?;

    Ok(format!("http://{addr}"))
}
