//! Custom request extractors.

mod employee_id;
mod validated_json;

pub use employee_id::EmployeeId;
pub use validated_json::ValidatedJson;
