//! Employee domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    FIELD_HIRE_DATE, FIELD_STATUS, STATUS_ACTIVE, STATUS_ON_VACATION, STATUS_RETIRED,
};
use crate::error::DomainError;
use crate::validation::{validate_employee, FieldError, ValidateFields, ValidationResult};

/// Employment status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnVacation,
    Retired,
}

impl EmployeeStatus {
    /// Wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => STATUS_ACTIVE,
            EmployeeStatus::OnVacation => STATUS_ON_VACATION,
            EmployeeStatus::Retired => STATUS_RETIRED,
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_ACTIVE => Ok(EmployeeStatus::Active),
            STATUS_ON_VACATION => Ok(EmployeeStatus::OnVacation),
            STATUS_RETIRED => Ok(EmployeeStatus::Retired),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Storage-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "jane.doe@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "EMP-0001"))]
    pub employee_number: String,
    #[cfg_attr(feature = "openapi", schema(example = "Software Engineer"))]
    pub position: String,
    #[cfg_attr(feature = "openapi", schema(example = "Engineering"))]
    pub department: String,
    pub status: EmployeeStatus,
    pub hire_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable employee fields as written to storage.
///
/// Used for both inserts and full-record updates; identifier and
/// timestamps are never part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub employee_number: String,
    pub position: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub hire_date: DateTime<Utc>,
}

/// Employee creation data transfer object.
///
/// `status` and `hireDate` are assigned by the service and ignored if sent.
/// Missing keys deserialize as empty strings so that validation can report
/// every absent field at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEmployee {
    #[cfg_attr(feature = "openapi", schema(example = "jane.doe@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "EMP-0001"))]
    pub employee_number: String,
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Software Engineer"))]
    pub position: String,
    #[cfg_attr(feature = "openapi", schema(example = "Engineering"))]
    pub department: String,
}

impl CreateEmployee {
    /// Build the storage record with the given status and hire date
    pub fn into_record(self, status: EmployeeStatus, hire_date: DateTime<Utc>) -> EmployeeRecord {
        EmployeeRecord {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            employee_number: self.employee_number,
            position: self.position,
            department: self.department,
            status,
            hire_date,
        }
    }
}

impl ValidateFields for CreateEmployee {
    fn validate_fields(&self) -> ValidationResult {
        validate_employee(
            &self.email,
            &self.employee_number,
            &self.first_name,
            &self.last_name,
        )
    }
}

/// Employee full-replacement data transfer object.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[cfg_attr(feature = "openapi", schema(example = "jane.doe@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "EMP-0001"))]
    pub employee_number: String,
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Staff Engineer"))]
    pub position: String,
    #[cfg_attr(feature = "openapi", schema(example = "Engineering"))]
    pub department: String,
    /// Required for a full replace
    pub status: Option<EmployeeStatus>,
    /// Required for a full replace
    pub hire_date: Option<DateTime<Utc>>,
}

impl ValidateFields for UpdateEmployee {
    fn validate_fields(&self) -> ValidationResult {
        let mut result = validate_employee(
            &self.email,
            &self.employee_number,
            &self.first_name,
            &self.last_name,
        );

        if self.status.is_none() {
            result.is_valid = false;
            result
                .errors
                .push(FieldError::new(FIELD_STATUS, "Status is required"));
        }
        if self.hire_date.is_none() {
            result.is_valid = false;
            result
                .errors
                .push(FieldError::new(FIELD_HIRE_DATE, "Hire date is required"));
        }

        result
    }
}

impl TryFrom<UpdateEmployee> for EmployeeRecord {
    type Error = DomainError;

    fn try_from(update: UpdateEmployee) -> Result<Self, Self::Error> {
        update.validate_fields().into_result().map_err(DomainError::Validation)?;

        let (Some(status), Some(hire_date)) = (update.status, update.hire_date) else {
            // validate_fields already reported the missing field
            return Err(DomainError::field(FieldError::new(
                FIELD_STATUS,
                "Status is required",
            )));
        };

        Ok(EmployeeRecord {
            first_name: update.first_name,
            last_name: update.last_name,
            email: update.email,
            employee_number: update.employee_number,
            position: update.position,
            department: update.department,
            status,
            hire_date,
        })
    }
}
