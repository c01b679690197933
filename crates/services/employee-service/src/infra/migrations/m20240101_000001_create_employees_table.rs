//! Migration: Create the employee schema and employees table.

use sea_orm_migration::prelude::*;

use super::{SCHEMA, UQ_EMAIL, UQ_EMPLOYEE_NUMBER};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!("CREATE SCHEMA IF NOT EXISTS {SCHEMA}"))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(employees_table())
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Employees::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Employees::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Employees::EmployeeNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::Position)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Employees::Department)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Employees::Status)
                            .string_len(20)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(Employees::HireDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Employees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Named so that unique violations can be told apart
        manager
            .create_index(
                Index::create()
                    .name(UQ_EMAIL)
                    .table(employees_table())
                    .col(Employees::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UQ_EMPLOYEE_NUMBER)
                    .table(employees_table())
                    .col(Employees::EmployeeNumber)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Listing filters
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_department")
                    .table(employees_table())
                    .col(Employees::Department)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(employees_table()).if_exists().to_owned())
            .await
    }
}

fn employees_table() -> (Alias, Employees) {
    (Alias::new(SCHEMA), Employees::Table)
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    EmployeeNumber,
    Position,
    Department,
    Status,
    HireDate,
    CreatedAt,
    UpdatedAt,
}
