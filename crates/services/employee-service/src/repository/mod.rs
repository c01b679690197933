//! Repository layer for data access.

pub mod entities;
mod employee_repository;

pub use employee_repository::{filter_condition, list_query, EmployeeRepository, EmployeeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
