//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_employees_table;

/// Schema holding every table owned by this service.
pub const SCHEMA: &str = "employee";

/// Unique index on `employees.email`.
pub const UQ_EMAIL: &str = "uq_employees_email";

/// Unique index on `employees.employee_number`.
pub const UQ_EMPLOYEE_NUMBER: &str = "uq_employees_employee_number";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_employees_table::Migration)]
    }
}
