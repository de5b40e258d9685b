//! Router construction and serving.

use crate::routes::{self, AppState};
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Build the full router over the shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(routes::home))
        .route("/visit", get(routes::visit))
        .route("/count", get(routes::count))
        .route("/api/visits", get(routes::api_visits))
        .route("/api/locations", get(routes::api_locations))
        .route("/about", get(routes::about))
        .route("/reset", get(routes::reset))
        .with_state(state)
        .layer(cors)
}

/// Serve `router` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    log::info!("Visit Tracker listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await
}

/// Bind `addr` and [`serve`] on a background task. Returns the bound
/// address, which differs from `addr` when binding port 0.
pub async fn start_server(router: Router, addr: SocketAddr) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = serve(listener, router).await {
            log::error!("Server error: {}", e);
        }
    });

    Ok(local)
}
