//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the employee entity, its payloads, field validation, listing filters and
//! pagination.

pub mod constants;
pub mod employee;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod validation;

pub use constants::*;
pub use employee::{CreateEmployee, Employee, EmployeeRecord, EmployeeStatus, UpdateEmployee};
pub use error::{ConflictKind, DomainError};
pub use filter::EmployeeFilter;
#[cfg(feature = "openapi")]
pub use pagination::EmployeePage;
pub use pagination::{PageRequest, Paginated, PaginationMeta};
pub use validation::{
    is_valid_email, validate_employee, validate_id, FieldError, ValidateFields, ValidationResult,
};
