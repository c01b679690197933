//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use serde::Serialize;
use thiserror::Error;

use crate::validation::FieldError;

/// Which uniqueness invariant a write would have violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConflictKind {
    /// Another employee already uses this email
    EmailExists,
    /// Another employee already uses this employee number
    EmployeeNumberExists,
    /// A uniqueness violation the storage layer could not attribute
    AlreadyExists,
}

impl ConflictKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ConflictKind::EmailExists => "EMAIL_ALREADY_EXISTS",
            ConflictKind::EmployeeNumberExists => "EMPLOYEE_NUMBER_ALREADY_EXISTS",
            ConflictKind::AlreadyExists => "ALREADY_EXISTS",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictKind::EmailExists => write!(f, "an employee with this email already exists"),
            ConflictKind::EmployeeNumberExists => {
                write!(f, "an employee with this employee number already exists")
            }
            ConflictKind::AlreadyExists => write!(f, "employee already exists"),
        }
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// One or more fields failed validation
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Status value outside the known set
    #[error("Invalid employee status: {0}")]
    InvalidStatus(String),
}

impl DomainError {
    /// Create a validation error from a single field failure
    pub fn field(error: FieldError) -> Self {
        DomainError::Validation(vec![error])
    }
}
