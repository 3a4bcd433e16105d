pub mod handlers;

use std::future::Future;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub use handlers::{ApiError, ApiState};

/// Build the rendezvous router over a shared registry.
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", post(handlers::handle_register))
        .route("/peers", get(handlers::handle_peers))
        .route("/peerinfo", get(handlers::handle_peer_info))
        .fallback(handlers::handle_not_found)
        .method_not_allowed_fallback(handlers::handle_method_not_allowed)
        .with_state(state)
        .layer(cors)
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(state: ApiState, addr: &str, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    serve_on(listener, state, shutdown).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: ApiState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "rendezvous API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!(addr = %local, "rendezvous API stopped");
    Ok(())
}
