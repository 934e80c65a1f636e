//! Capability checks: "may the current session perform `operation` on `entity`
//! within `service`?"

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access-control domain that governs an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessService {
    /// Entities generated for this project (employees, evaluations, ...).
    Project,
    /// Resources owned by the host platform (conversations, notifications, ...).
    Platform,
}

impl AccessService {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessService::Project => "project",
            AccessService::Platform => "platform",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl AccessOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessOperation::Create => "create",
            AccessOperation::Read => "read",
            AccessOperation::Update => "update",
            AccessOperation::Delete => "delete",
        }
    }
}

/// The capability check itself could not be answered.
///
/// This signals a broken authorization integration, not a denial: callers
/// propagate it instead of treating it as "no access".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessCheckError {
    #[error("authorization service unavailable: {0}")]
    Unavailable(String),

    #[error("unknown entity '{0}'")]
    UnknownEntity(String),
}

/// Synchronous capability-check collaborator.
pub trait AccessChecker {
    fn has_access(
        &self,
        entity: &str,
        operation: AccessOperation,
        service: AccessService,
    ) -> Result<bool, AccessCheckError>;
}

impl<T> AccessChecker for &T
where
    T: AccessChecker + ?Sized,
{
    fn has_access(
        &self,
        entity: &str,
        operation: AccessOperation,
        service: AccessService,
    ) -> Result<bool, AccessCheckError> {
        (**self).has_access(entity, operation, service)
    }
}

impl<T> AccessChecker for Arc<T>
where
    T: AccessChecker + ?Sized,
{
    fn has_access(
        &self,
        entity: &str,
        operation: AccessOperation,
        service: AccessService,
    ) -> Result<bool, AccessCheckError> {
        (**self).has_access(entity, operation, service)
    }
}

/// Adapter turning a closure into an [`AccessChecker`].
#[derive(Debug, Clone, Copy)]
pub struct CheckFn<F>(pub F);

impl<F> CheckFn<F>
where
    F: Fn(&str, AccessOperation, AccessService) -> Result<bool, AccessCheckError>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> AccessChecker for CheckFn<F>
where
    F: Fn(&str, AccessOperation, AccessService) -> Result<bool, AccessCheckError>,
{
    fn has_access(
        &self,
        entity: &str,
        operation: AccessOperation,
        service: AccessService,
    ) -> Result<bool, AccessCheckError> {
        (self.0)(entity, operation, service)
    }
}
