//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Employee Status
// =============================================================================

/// Wire value for an active employee (default on creation)
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// Wire value for an employee currently on vacation
pub const STATUS_ON_VACATION: &str = "ON_VACATION";

/// Wire value for a retired employee
pub const STATUS_RETIRED: &str = "RETIRED";

/// All valid status values
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_ON_VACATION, STATUS_RETIRED];

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Largest row offset storage accepts (signed 64-bit)
pub const MAX_OFFSET: u64 = i64::MAX as u64;

// =============================================================================
// Validation
// =============================================================================

/// Practical email grammar: local@domain with an alphabetic suffix of 2+ chars
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Field names as they appear in error details (JSON keys)
pub const FIELD_ID: &str = "id";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_EMPLOYEE_NUMBER: &str = "employeeNumber";
pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_HIRE_DATE: &str = "hireDate";
