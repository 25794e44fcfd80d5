use super::{handlers, AppState};
use crate::domain::model::ResourceKind;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(ResourceKind::Endpoints.route(), get(handlers::endpoints))
        .route(ResourceKind::Services.route(), get(handlers::services))
}
