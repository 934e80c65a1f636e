//! `evalboard-core` — shared building blocks for the admin dashboard.
//!
//! This crate contains **pure** primitives (no IO, no rendering concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, FieldViolation};
pub use id::{EmployeeId, EvaluationId, OrganizationId, TenantId, UserId};
