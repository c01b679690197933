//! HTTP boundary: routing, extractors, handlers and API documentation.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::{create_router, BASE_PATH};
pub use state::AppState;
