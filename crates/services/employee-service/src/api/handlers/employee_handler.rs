//! Employee handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{AppError, AppResult};
use domain::{
    CreateEmployee, Employee, EmployeeFilter, EmployeeRecord, EmployeeStatus, Paginated,
    UpdateEmployee,
};

use crate::api::extractors::{EmployeeId, ValidatedJson};
use crate::api::state::AppState;

/// Listing query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListEmployeesQuery {
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Page size, capped at 100 (default 10); `page_size` is also accepted
    #[serde(alias = "page_size")]
    pub page_size: Option<i64>,
    /// Exact department match
    pub department: Option<String>,
    /// One of ACTIVE, ON_VACATION, RETIRED
    pub status: Option<String>,
    /// Exact position match
    pub position: Option<String>,
}

impl ListEmployeesQuery {
    /// Typed filter; an unknown status is a field error
    pub fn filter(&self) -> AppResult<EmployeeFilter> {
        let status = match self.status.as_deref() {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<EmployeeStatus>()?),
            _ => None,
        };

        Ok(EmployeeFilter {
            department: self.department.clone(),
            status,
            position: self.position.clone(),
        })
    }
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/employees-service/api/employees",
    tag = "Employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid input, every failing field is listed"),
        (status = 409, description = "Email or employee number already in use")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state.employee_service.create_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/employees-service/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = Employee),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(employee))
}

/// List employees, newest first
#[utoipa::path(
    get,
    path = "/employees-service/api/employees",
    tag = "Employees",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "One page of employees", body = domain::EmployeePage),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> AppResult<Json<Paginated<Employee>>> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;
    let filter = query.filter()?;

    let page = state
        .employee_service
        .list_employees(query.page, query.page_size, filter)
        .await?;

    Ok(Json(page))
}

/// Replace an employee's mutable fields
#[utoipa::path(
    put,
    path = "/employees-service/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid ID or input"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email or employee number already in use")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    ValidatedJson(payload): ValidatedJson<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    let record = EmployeeRecord::try_from(payload)?;
    let employee = state.employee_service.update_employee(id, record).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees-service/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Employee is still referenced")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<StatusCode> {
    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
