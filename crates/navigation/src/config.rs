//! Navigation configuration.

use serde::{Deserialize, Serialize};

use evalboard_auth::Role;
use evalboard_core::OrganizationId;

use crate::routes;

/// Environment variable holding a comma-separated list of tenant-owner roles.
pub const TENANT_ROLES_VAR: &str = "EVALBOARD_TENANT_ROLES";
/// Environment variable overriding the organizations listing path.
pub const ORGANIZATIONS_PATH_VAR: &str = "EVALBOARD_ORGANIZATIONS_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Roles that scope a user to their tenant's organization.
    pub tenant_roles: Vec<Role>,
    /// Organizations listing page; detail pages live under `{path}/view/{id}`.
    pub organizations_path: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            tenant_roles: vec![Role::OWNER],
            organizations_path: routes::ORGANIZATIONS.to_string(),
        }
    }
}

impl NavigationConfig {
    /// Load from process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = get(TENANT_ROLES_VAR) {
            let roles: Vec<Role> = raw
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(|r| Role::new(r.to_string()))
                .collect();
            if roles.is_empty() {
                tracing::warn!("{TENANT_ROLES_VAR} is set but empty; keeping default tenant roles");
            } else {
                config.tenant_roles = roles;
            }
        }

        if let Some(path) = get(ORGANIZATIONS_PATH_VAR) {
            let path = path.trim().trim_end_matches('/');
            if path.starts_with('/') && path.len() > 1 {
                config.organizations_path = path.to_string();
            } else {
                tracing::warn!(path, "{ORGANIZATIONS_PATH_VAR} must be an absolute path; using default");
            }
        }

        config
    }

    /// Detail page of one organization.
    pub fn organization_detail_path(&self, id: &OrganizationId) -> String {
        format!("{}/view/{}", self.organizations_path, id)
    }
}
