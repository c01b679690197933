//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::EmployeeService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(employee_service: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employee_service,
            database,
        }
    }
}
