use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for RBAC.
///
/// Roles are opaque strings issued by the host platform; mapping roles to
/// permissions is done by [`crate::RolePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Role granting ownership visibility over a tenant's organization.
    pub const OWNER: Role = Role(Cow::Borrowed("owner"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable label: `"tenant_owner"` → `"Tenant owner"`.
    pub fn humanize(&self) -> String {
        let spaced = self.0.trim().replace(['_', '-'], " ").to_lowercase();
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_capitalizes_first_word_only() {
        assert_eq!(Role::new("tenant_owner").humanize(), "Tenant owner");
        assert_eq!(Role::OWNER.humanize(), "Owner");
        assert_eq!(Role::new("HR-Manager").humanize(), "Hr manager");
        assert_eq!(Role::new("").humanize(), "");
    }
}
