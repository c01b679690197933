//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{Employee, EmployeeRecord, EmployeeStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(schema_name = "employee", table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub employee_number: String,
    pub position: String,
    pub department: String,
    pub status: String,
    pub hire_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fails only when the stored status is outside the known set.
impl TryFrom<Model> for Employee {
    type Error = domain::DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: model.id,
            status: model.status.parse::<EmployeeStatus>()?,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            employee_number: model.employee_number,
            position: model.position,
            department: model.department,
            hire_date: model.hire_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Active model carrying every mutable column; id and timestamps stay unset.
impl From<EmployeeRecord> for ActiveModel {
    fn from(record: EmployeeRecord) -> Self {
        ActiveModel {
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            email: Set(record.email),
            employee_number: Set(record.employee_number),
            position: Set(record.position),
            department: Set(record.department),
            status: Set(record.status.as_str().to_string()),
            hire_date: Set(record.hire_date),
            ..Default::default()
        }
    }
}
