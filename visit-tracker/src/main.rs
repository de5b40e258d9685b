//! Visit Tracker service: reads configuration from the environment (and
//! `.env`) and serves on BIND_ADDR, default http://0.0.0.0:5002/

use std::sync::Arc;
use visit_tracker::config::StoreBackend;
use visit_tracker::{AppState, Config, build_router, server, store};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = match store::open(&config) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to open {:?} store: {}", config.store_backend, e);
            std::process::exit(1);
        }
    };

    match config.store_backend {
        StoreBackend::Redis => log::info!("Using redis store at {}", config.redis_url()),
        StoreBackend::Memory => log::warn!("Using in-memory store; visits are lost on exit"),
    }
    if config.enable_reset {
        log::info!("GET /reset is enabled");
    }

    let addr = config.bind_addr;
    let state = Arc::new(AppState::new(config, store));
    let app = build_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
