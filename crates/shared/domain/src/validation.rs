//! Field validation for employee input and path parameters.
//!
//! All checks are pure and accumulate every failure instead of stopping at
//! the first one. Uniqueness is a storage concern and is not checked here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::ValidateEmail;

use crate::constants::{
    EMAIL_PATTERN, FIELD_EMAIL, FIELD_EMPLOYEE_NUMBER, FIELD_FIRST_NAME, FIELD_ID,
    FIELD_LAST_NAME,
};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Field name as sent by the client
    pub field: String,
    /// Human-readable reason
    pub message: String,
    /// Offending value, when echoing it back is useful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rejected_value: None,
        }
    }

    pub fn with_rejected_value(mut self, value: impl Into<String>) -> Self {
        self.rejected_value = Some(value.into());
        self
    }
}

/// Outcome of validating a payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    fn push(&mut self, error: FieldError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Convert into a `Result`, keeping the full error list on failure
    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Payloads that can check their own fields.
pub trait ValidateFields {
    fn validate_fields(&self) -> ValidationResult;
}

/// Validate the required employee fields.
///
/// Errors are reported in the order email, employee number, first name,
/// last name, one entry per failing field.
pub fn validate_employee(
    email: &str,
    employee_number: &str,
    first_name: &str,
    last_name: &str,
) -> ValidationResult {
    let mut result = ValidationResult {
        is_valid: true,
        errors: Vec::new(),
    };

    if email.is_empty() {
        result.push(FieldError::new(FIELD_EMAIL, "Email is required"));
    } else if !is_valid_email(email) {
        result.push(
            FieldError::new(FIELD_EMAIL, "Email format is invalid").with_rejected_value(email),
        );
    }

    if employee_number.is_empty() {
        result.push(FieldError::new(
            FIELD_EMPLOYEE_NUMBER,
            "Employee number is required",
        ));
    }

    if first_name.trim().is_empty() {
        result.push(FieldError::new(FIELD_FIRST_NAME, "First name is required"));
    }

    if last_name.trim().is_empty() {
        result.push(FieldError::new(FIELD_LAST_NAME, "Last name is required"));
    }

    result
}

/// Check an address against both the `validator` email grammar and the
/// stricter pattern requiring a TLD-like suffix.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email() && EMAIL_RE.is_match(email)
}

/// Parse a raw path segment into a positive identifier.
pub fn validate_id(raw: &str) -> Result<i64, Vec<FieldError>> {
    let id: i64 = raw.parse().map_err(|_| {
        vec![FieldError::new(FIELD_ID, "ID must be a valid integer").with_rejected_value(raw)]
    })?;

    if id <= 0 {
        return Err(vec![FieldError::new(FIELD_ID, "ID must be a positive number")]);
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_employee_has_no_errors() {
        let result = validate_employee("jane.doe@example.com", "EMP-001", "Jane", "Doe");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn every_missing_field_is_reported_in_order() {
        let result = validate_employee("", "", "   ", "");
        assert!(!result.is_valid);

        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![FIELD_EMAIL, FIELD_EMPLOYEE_NUMBER, FIELD_FIRST_NAME, FIELD_LAST_NAME]
        );
        assert!(result.errors.iter().all(|e| e.rejected_value.is_none()));
    }

    #[test]
    fn single_missing_field_yields_single_error() {
        let result = validate_employee("jane@example.com", "", "Jane", "Doe");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, FIELD_EMPLOYEE_NUMBER);
        assert_eq!(result.errors[0].message, "Employee number is required");
    }

    #[test]
    fn malformed_email_echoes_rejected_value() {
        let result = validate_employee("not-an-email", "EMP-1", "Jane", "Doe");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "Email format is invalid");
        assert_eq!(result.errors[0].rejected_value.as_deref(), Some("not-an-email"));
    }

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("a.b+tag@sub.example.org"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user example@example.com"));
    }

    #[test]
    fn names_are_trimmed_but_identifiers_are_not() {
        let result = validate_employee("jane@example.com", " ", "\t", "\n");
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        // A whitespace employee number is present, names are blank once trimmed
        assert_eq!(fields, vec![FIELD_FIRST_NAME, FIELD_LAST_NAME]);
    }

    #[test]
    fn validate_id_accepts_positive_integers() {
        assert_eq!(validate_id("42"), Ok(42));
        assert_eq!(validate_id("1"), Ok(1));
    }

    #[test]
    fn validate_id_rejects_non_integers() {
        let errors = validate_id("abc").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FIELD_ID);
        assert!(errors[0].message.contains("must be a valid integer"));
        assert_eq!(errors[0].rejected_value.as_deref(), Some("abc"));

        assert!(validate_id("").is_err());
        assert!(validate_id("4.2").is_err());
        assert!(validate_id("99999999999999999999").is_err());
    }

    #[test]
    fn validate_id_rejects_non_positive_numbers() {
        let errors = validate_id("-5").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("must be a positive number"));

        let errors = validate_id("0").unwrap_err();
        assert!(errors[0].message.contains("must be a positive number"));
    }
}
