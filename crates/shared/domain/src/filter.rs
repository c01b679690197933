//! Listing filters.

use crate::employee::EmployeeStatus;

/// Optional equality filters for employee listings.
///
/// Every field defaults to "not applied". Blank strings are treated the
/// same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub position: Option<String>,
}

impl EmployeeFilter {
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Department predicate, if it should be applied
    pub fn department(&self) -> Option<&str> {
        non_empty(self.department.as_deref())
    }

    /// Status predicate, if it should be applied
    pub fn status(&self) -> Option<EmployeeStatus> {
        self.status
    }

    /// Position predicate, if it should be applied
    pub fn position(&self) -> Option<&str> {
        non_empty(self.position.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_not_applied() {
        let filter = EmployeeFilter {
            department: Some(String::new()),
            status: None,
            position: Some(String::new()),
        };
        assert_eq!(filter.department(), None);
        assert_eq!(filter.position(), None);
    }

    #[test]
    fn builders_set_predicates() {
        let filter = EmployeeFilter::default()
            .with_department("Engineering")
            .with_status(EmployeeStatus::Retired);
        assert_eq!(filter.department(), Some("Engineering"));
        assert_eq!(filter.status(), Some(EmployeeStatus::Retired));
        assert_eq!(filter.position(), None);
    }
}
