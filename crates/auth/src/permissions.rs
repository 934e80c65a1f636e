use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::access::{AccessOperation, AccessService};

/// Permission identifier.
///
/// Permissions are opaque strings of the form `"{service}.{entity}.{operation}"`
/// (e.g. `"project.employee.read"`). The wildcard `"*"` grants everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Permission required to perform `operation` on `entity` within `service`.
    pub fn for_access(entity: &str, operation: AccessOperation, service: AccessService) -> Self {
        Self(Cow::Owned(format!(
            "{}.{}.{}",
            service.as_str(),
            entity,
            operation.as_str()
        )))
    }

    pub fn wildcard() -> Self {
        Self(Cow::Borrowed("*"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
