//! Route configuration.

use std::any::Any;
use std::time::Duration;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::AppError;

use crate::api::handlers::{employee_routes, health_routes};
use crate::api::middleware::error_path;
use crate::api::openapi::ApiDoc;
use crate::api::state::AppState;

/// Prefix for every API route.
pub const BASE_PATH: &str = "/employees-service/api";

/// Create the main router with all routes and middleware.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .nest("/employees", employee_routes())
        .nest("/health", health_routes());

    Router::new()
        .nest(BASE_PATH, api)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(error_path))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Render a handler panic as a regular internal error.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("handler panicked: {detail}")).into_response()
}
