//! Service layer - business logic.

mod employee_service;

pub use employee_service::{EmployeeManager, EmployeeService};
