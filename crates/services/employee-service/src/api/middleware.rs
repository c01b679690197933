//! Request-aware middleware.

use axum::{extract::Request, middleware::Next, response::Response};

use common::ErrorBody;

/// Add the request path to JSON error bodies rendered further in.
pub async fn error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    match response.extensions().get::<ErrorBody>() {
        Some(body) if body.path.is_none() => {
            let status = response.status();
            body.clone().with_path(path).render(status)
        }
        _ => response,
    }
}
