//! Axum route handlers for the visit tracker.

use crate::config::Config;
use crate::error::AppError;
use crate::markers;
use crate::pages::{AboutPage, HomePage};
use crate::quotes;
use crate::store::{self, MARKER_CAP, VisitStore};
use askama::Template;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use std::sync::Arc;
use visit_tracker_types::{LocationsResponse, VisitsResponse};

pub const RESET_DISABLED_MESSAGE: &str = "Reset disabled. Set ENABLE_RESET=true to allow.";

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn VisitStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn VisitStore>) -> Self {
        Self { config, store }
    }
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

// GET /
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let count = store::visit_count(state.store.as_ref()).await;
    let quote = quotes::pick_quote(&mut rand::thread_rng());
    let page = HomePage::new(&state.config, quote, count);
    Ok(Html(page.render()?))
}

// GET /visit
pub async fn visit(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let count = state.store.increment_counter().await?;

    let marker = markers::generate_marker(count);
    let raw = serde_json::to_string(&marker)?;

    // Counter and list are separate commands; a failure here leaves the
    // counter already advanced.
    state.store.push_marker(&raw).await?;
    state.store.trim_markers(0, MARKER_CAP - 1).await?;

    log::debug!("Recorded {} at ({}, {})", marker.note, marker.lat, marker.lng);
    Ok(redirect_home())
}

// GET /count
pub async fn count(State(state): State<Arc<AppState>>) -> Result<String, AppError> {
    let count = state.store.increment_counter().await?;
    Ok(format!("This page has been visited {} times.", count))
}

// GET /api/visits
pub async fn api_visits(State(state): State<Arc<AppState>>) -> Json<VisitsResponse> {
    let visits = store::visit_count(state.store.as_ref()).await;
    Json(VisitsResponse { visits })
}

// GET /api/locations
pub async fn api_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LocationsResponse>, AppError> {
    let raw = state.store.list_markers(0, MARKER_CAP - 1).await?;

    // Entries are returned as stored; only text that is not JSON is dropped.
    let locations: Vec<serde_json::Value> = raw
        .iter()
        .filter_map(|entry| match serde_json::from_str(entry) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Skipping unreadable marker {:?}: {}", entry, e);
                None
            }
        })
        .collect();

    Ok(Json(LocationsResponse { locations }))
}

// GET /about
pub async fn about(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let page = AboutPage::new(&state.config);
    Ok(Html(page.render()?))
}

// GET /reset
pub async fn reset(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    if !state.config.enable_reset {
        return Ok((StatusCode::FORBIDDEN, RESET_DISABLED_MESSAGE).into_response());
    }

    state.store.delete_counter().await?;
    state.store.delete_markers().await?;

    log::info!("Visit counter and markers reset");
    Ok(redirect_home())
}
