//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::AppState;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "employee-management";

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    #[schema(example = "employee-management")]
    pub service: String,
    #[schema(example = "UP")]
    pub database: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity.
#[utoipa::path(
    get,
    path = "/employees-service/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_up = match state.database.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed: database unreachable");
            false
        }
    };

    let status = if database_up { "UP" } else { "DOWN" };
    let response = HealthResponse {
        status: status.to_string(),
        service: SERVICE_NAME.to_string(),
        database: status.to_string(),
    };

    if database_up {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
