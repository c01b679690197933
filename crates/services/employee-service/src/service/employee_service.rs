//! Employee service - orchestrates validation output, business defaults
//! and the persistence gateway.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use common::AppResult;
use domain::{
    CreateEmployee, Employee, EmployeeFilter, EmployeeRecord, EmployeeStatus, PageRequest,
    Paginated,
};

use crate::repository::EmployeeRepository;

/// Employee service trait for dependency injection.
///
/// Inputs are expected to be validated already; errors from the
/// repository surface unchanged.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Create an employee; status and hire date are assigned here
    async fn create_employee(&self, input: CreateEmployee) -> AppResult<Employee>;

    /// Get employee by ID
    async fn get_employee(&self, id: i64) -> AppResult<Employee>;

    /// List one page of employees matching the filter
    async fn list_employees(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
        filter: EmployeeFilter,
    ) -> AppResult<Paginated<Employee>>;

    /// Replace all mutable fields of an employee
    async fn update_employee(&self, id: i64, record: EmployeeRecord) -> AppResult<Employee>;

    /// Permanently delete an employee
    async fn delete_employee(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService using repository.
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance with repository
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn create_employee(&self, input: CreateEmployee) -> AppResult<Employee> {
        let record = input.into_record(EmployeeStatus::Active, Utc::now());
        let employee = self.repo.create(record).await?;

        tracing::info!(
            employee_id = employee.id,
            employee_number = %employee.employee_number,
            "Employee created"
        );
        Ok(employee)
    }

    async fn get_employee(&self, id: i64) -> AppResult<Employee> {
        self.repo.find_by_id(id).await
    }

    async fn list_employees(
        &self,
        page: Option<i64>,
        page_size: Option<i64>,
        filter: EmployeeFilter,
    ) -> AppResult<Paginated<Employee>> {
        let request = PageRequest::normalize(page, page_size);

        let (data, total) = futures::try_join!(
            self.repo
                .find_all(&filter, request.limit(), request.offset()),
            self.repo.count(&filter),
        )?;

        Ok(Paginated::new(data, request, total))
    }

    async fn update_employee(&self, id: i64, record: EmployeeRecord) -> AppResult<Employee> {
        let employee = self.repo.update(id, record).await?;

        tracing::info!(employee_id = id, "Employee updated");
        Ok(employee)
    }

    async fn delete_employee(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }
}
