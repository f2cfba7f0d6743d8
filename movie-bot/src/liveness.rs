//! Liveness endpoint for process monitors: any method, any path → 200 with a fixed body.
//!
//! Runs on its own OS thread with a single-threaded runtime, so a busy or stalled bot loop never
//! delays it. The thread is detached and does not hold the process open.

use axum::{http::StatusCode, Router};
use std::net::SocketAddr;
use tracing::{error, info};

pub const LIVENESS_BODY: &str = "Epha's Bot is alive and polling!";

async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, LIVENESS_BODY)
}

/// Router answering every request with [`LIVENESS_BODY`].
pub fn router() -> Router {
    Router::new().fallback(alive)
}

/// Serves [`router`] on an already-bound listener until the listener fails.
pub async fn serve(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}

/// Binds `addr` synchronously (bind errors surface to the caller), then serves on a detached
/// `liveness` thread. Returns the bound address.
pub fn spawn(addr: SocketAddr) -> anyhow::Result<SocketAddr> {
    let listener = std::net::TcpListener::bind(addr)?;
    listener.set_nonblocking(true)?;
    let local_addr = listener.local_addr()?;

    std::thread::Builder::new()
        .name("liveness".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!(error = %e, "Failed to build liveness runtime");
                    return;
                }
            };
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::from_std(listener) {
                    Ok(listener) => listener,
                    Err(e) => {
                        error!(error = %e, "Failed to register liveness listener");
                        return;
                    }
                };
                if let Err(e) = serve(listener).await {
                    error!(error = %e, "Liveness server stopped");
                }
            });
        })?;

    info!(addr = %local_addr, "Liveness server listening");
    Ok(local_addr)
}
