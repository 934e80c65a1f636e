//! Record interfaces and form schemas for the admin screens.
//!
//! Records mirror what the host platform's data API returns (often partial
//! projections, hence the optional fields). Form schemas are declarative
//! field lists checked before a payload is turned into a typed input.

pub mod employee;
pub mod organization;
pub mod performance_evaluation;
pub mod query;
pub mod schema;
pub mod user;

pub use employee::{EmployeeCount, EmployeeInput, EmployeeQuery, EmployeeRecord};
pub use organization::{OrganizationQuery, OrganizationRecord};
pub use performance_evaluation::{
    PerformanceEvaluationInput, PerformanceEvaluationQuery, PerformanceEvaluationRecord,
};
pub use query::{ListQuery, SortDirection, SortOrder};
pub use schema::{FieldKind, FieldSpec, FormInput, FormSchema};
pub use user::UserRecord;
