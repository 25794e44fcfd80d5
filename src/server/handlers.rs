//! HTTP request handlers for the facade.

use super::AppState;
use crate::core::query::fetch_json;
use crate::domain::model::ResourceKind;
use crate::utils::error::InspectorError;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Read failure, answered as 500 with the error text.
#[derive(Debug)]
pub struct ApiError(pub InspectorError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.to_string(),
        )
            .into_response()
    }
}

impl From<InspectorError> for ApiError {
    fn from(err: InspectorError) -> Self {
        Self(err)
    }
}

async fn collection(state: &AppState, kind: ResourceKind) -> Result<Response, ApiError> {
    let json = fetch_json(state.agent.as_ref(), kind)
        .await
        .inspect_err(|e| tracing::error!("❌ Reading {} from agent failed: {}", kind, e))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
        .into_response())
}

/// GET /endpoints
pub async fn endpoints(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    collection(&state, ResourceKind::Endpoints).await
}

/// GET /services
pub async fn services(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    collection(&state, ResourceKind::Services).await
}
