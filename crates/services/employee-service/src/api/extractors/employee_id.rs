//! Path identifier extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;
use domain::validate_id;

/// Positive employee identifier taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        validate_id(&raw)
            .map(EmployeeId)
            .map_err(AppError::invalid_fields)
    }
}
