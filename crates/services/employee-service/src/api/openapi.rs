//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::health_handler::HealthResponse;
use domain::{
    CreateEmployee, Employee, EmployeePage, EmployeeStatus, FieldError, PaginationMeta,
    UpdateEmployee,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Management Service",
        description = "CRUD and paginated listing of employee records"
    ),
    paths(
        crate::api::handlers::employee_handler::create_employee,
        crate::api::handlers::employee_handler::get_employee,
        crate::api::handlers::employee_handler::list_employees,
        crate::api::handlers::employee_handler::update_employee,
        crate::api::handlers::employee_handler::delete_employee,
        crate::api::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            Employee,
            EmployeeStatus,
            CreateEmployee,
            UpdateEmployee,
            EmployeePage,
            PaginationMeta,
            FieldError,
            HealthResponse,
        )
    ),
    tags(
        (name = "Employees", description = "Employee management endpoints"),
        (name = "Health", description = "Liveness and database connectivity"),
    )
)]
pub struct ApiDoc;
