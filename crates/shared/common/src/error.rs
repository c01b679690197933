//! Unified error handling for the HTTP boundary.
//!
//! Every layer (persistence gateway, orchestration, handlers) returns
//! [`AppError`], which renders itself as a JSON error body with a stable
//! code, a human-readable message and, for validation failures, the full
//! list of offending fields. Every body is stamped with the time it was
//! rendered; the request path is added by the router (see [`ErrorBody`]).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use domain::{ConflictKind, DomainError, FieldError};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Conflict(ConflictKind),

    #[error("Employee is still referenced and cannot be deleted")]
    ReferencedCannotDelete,

    // Validation
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {context}")]
    Database {
        context: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

/// Rendered error.
///
/// A copy travels in the response extensions so that a layer which knows
/// the request can fill in `path` and render it again.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorBody {
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Render as `{"error": {...}}` with the given status.
    pub fn render(self, status: StatusCode) -> Response {
        let mut response = (
            status,
            Json(ErrorResponse {
                error: self.clone(),
            }),
        )
            .into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(kind) => kind.code(),
            AppError::ReferencedCannotDelete => "REFERENCED_CANNOT_DELETE",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database { .. } => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::ReferencedCannotDelete => StatusCode::CONFLICT,
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation { message, .. } => message.clone(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database { context, source } => {
                tracing::error!(context, error = ?source, "Database error");
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Offending fields, for validation failures
    pub fn details(&self) -> &[FieldError] {
        match self {
            AppError::Validation { details, .. } => details,
            _ => &[],
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let code = self.code().to_string();
        let details = match self {
            AppError::Validation { details, .. } => details,
            _ => Vec::new(),
        };

        ErrorBody {
            code,
            message,
            details,
            timestamp: Utc::now(),
            path: None,
        }
        .render(status)
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(details) => AppError::invalid_fields(details),
            DomainError::InvalidStatus(value) => AppError::invalid_fields(vec![FieldError::new(
                domain::FIELD_STATUS,
                format!("Status must be one of {}", domain::VALID_STATUSES.join(", ")),
            )
            .with_rejected_value(value)]),
        }
    }
}

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(source: sea_orm::DbErr) -> Self {
        AppError::Database {
            context: "database operation",
            source,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(kind: ConflictKind) -> Self {
        AppError::Conflict(kind)
    }

    pub fn invalid_fields(details: Vec<FieldError>) -> Self {
        AppError::Validation {
            message: "Validation failed".to_string(),
            details,
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    #[cfg(feature = "database")]
    pub fn database(context: &'static str, source: sea_orm::DbErr) -> Self {
        AppError::Database { context, source }
    }
}
