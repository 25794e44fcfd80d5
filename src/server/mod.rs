//! Read-only HTTP facade.
//!
//! # Endpoints
//!
//! - `GET /endpoints` - agent endpoint list as JSON
//! - `GET /services` - agent service list as JSON

pub mod handlers;
pub mod routes;

use crate::domain::ports::AgentApi;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
pub struct AppState {
    agent: Arc<dyn AgentApi>,
}

impl AppState {
    pub fn new(agent: Arc<dyn AgentApi>) -> Self {
        Self { agent }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
