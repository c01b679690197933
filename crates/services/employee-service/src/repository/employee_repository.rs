//! Employee repository: the persistence gateway over the employees table.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, SqlErr,
};

use super::entities::employee::{ActiveModel, Column, Entity as EmployeeEntity, Model};
use crate::infra::migrations::{UQ_EMAIL, UQ_EMPLOYEE_NUMBER};
use common::{AppError, AppResult, OptionExt};
use domain::{ConflictKind, Employee, EmployeeFilter, EmployeeRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Absence is reported as `AppError::NotFound`, never as an empty success.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee; storage assigns id and timestamps
    async fn create(&self, record: EmployeeRecord) -> AppResult<Employee>;

    /// Find employee by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Employee>;

    /// One page of employees matching the filter, newest first
    async fn find_all(
        &self,
        filter: &EmployeeFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Employee>>;

    /// Number of employees matching the filter
    async fn count(&self, filter: &EmployeeFilter) -> AppResult<u64>;

    /// Replace every mutable field of an existing employee
    async fn update(&self, id: i64, record: EmployeeRecord) -> AppResult<Employee>;

    /// Permanently delete employee by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository backed by SeaORM
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn create(&self, record: EmployeeRecord) -> AppResult<Employee> {
        let active_model = ActiveModel::from(record);

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error("insert employee", e))?;

        to_domain(model)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Employee> {
        let model = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database("find employee", e))?
            .ok_or_not_found()?;

        to_domain(model)
    }

    async fn find_all(
        &self,
        filter: &EmployeeFilter,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<Employee>> {
        let models = list_query(filter, limit, offset)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database("list employees", e))?;

        models.into_iter().map(to_domain).collect()
    }

    async fn count(&self, filter: &EmployeeFilter) -> AppResult<u64> {
        EmployeeEntity::find()
            .filter(filter_condition(filter))
            .count(&self.db)
            .await
            .map_err(|e| AppError::database("count employees", e))
    }

    async fn update(&self, id: i64, record: EmployeeRecord) -> AppResult<Employee> {
        // Single statement: replace, stamp with the storage clock, read back
        let model = EmployeeEntity::update_many()
            .set(ActiveModel::from(record))
            .col_expr(Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_write_error("update employee", e))?
            .into_iter()
            .next()
            .ok_or_not_found()?;

        to_domain(model)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_write_error("delete employee", e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Conjunctive predicate for the non-empty filter fields.
///
/// Clauses are appended in a fixed order (department, status, position),
/// which is also the order of their bound parameters.
pub fn filter_condition(filter: &EmployeeFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(department) = filter.department() {
        condition = condition.add(Column::Department.eq(department));
    }
    if let Some(status) = filter.status() {
        condition = condition.add(Column::Status.eq(status.as_str()));
    }
    if let Some(position) = filter.position() {
        condition = condition.add(Column::Position.eq(position));
    }

    condition
}

/// Page query: filter, newest first, then limit and offset.
pub fn list_query(filter: &EmployeeFilter, limit: u64, offset: u64) -> Select<EmployeeEntity> {
    EmployeeEntity::find()
        .filter(filter_condition(filter))
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .limit(limit)
        .offset(offset)
}

fn to_domain(model: Model) -> AppResult<Employee> {
    let id = model.id;
    Employee::try_from(model)
        .map_err(|e| AppError::internal(format!("employee {id} has unreadable stored data: {e}")))
}

/// Translate write failures into the conflict taxonomy.
fn map_write_error(context: &'static str, err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            let kind = classify_unique_violation(&detail);
            tracing::warn!(context, constraint = %detail, "Unique constraint violated");
            AppError::conflict(kind)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::warn!(context, constraint = %detail, "Foreign key constraint violated");
            AppError::ReferencedCannotDelete
        }
        _ => AppError::database(context, err),
    }
}

/// Name the conflicting field from the violated index.
fn classify_unique_violation(detail: &str) -> ConflictKind {
    if detail.contains(UQ_EMPLOYEE_NUMBER) {
        ConflictKind::EmployeeNumberExists
    } else if detail.contains(UQ_EMAIL) {
        ConflictKind::EmailExists
    } else {
        ConflictKind::AlreadyExists
    }
}
