//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;
use domain::ValidateFields;

/// JSON extractor that runs field validation on the payload.
///
/// Malformed JSON is a `BadRequest`; a well-formed payload with invalid
/// fields is a `Validation` error listing every offending field.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        // Validate
        value
            .validate_fields()
            .into_result()
            .map_err(AppError::invalid_fields)?;

        Ok(ValidatedJson(value))
    }
}
