//! Visit Tracker: counts page visits in Redis and pins a random map marker
//! for each recorded visit.
//!
//! Default: http://0.0.0.0:5002/

pub mod config;
pub mod error;
pub mod markers;
pub mod pages;
pub mod quotes;
pub mod routes;
pub mod server;
pub mod store;

pub use config::Config;
pub use routes::AppState;
pub use server::{build_router, serve, start_server};
pub use store::{MemoryStore, RedisStore, VisitStore};
