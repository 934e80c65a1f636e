//! Role → permission policy and the per-session capability check built on it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    AccessCheckError, AccessChecker, AccessOperation, AccessService, Permission, Role, Session,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Authorize a set of granted permissions against a required one.
///
/// - No IO
/// - No panics
pub fn authorize(granted: &[Permission], required: &Permission) -> Result<(), AuthzError> {
    let perms: HashSet<&str> = granted.iter().map(|p| p.as_str()).collect();

    if perms.contains("*") || perms.contains(required.as_str()) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

/// Static role → permission mapping.
///
/// When `known_entities` is set, checks for any other entity fail with
/// [`AccessCheckError::UnknownEntity`] instead of silently denying, which
/// surfaces typos in navigation catalogs early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicy {
    #[serde(default)]
    grants: HashMap<Role, Vec<Permission>>,

    #[serde(default)]
    known_entities: Option<HashSet<String>>,
}

impl RolePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `permissions` to `role` (appends to existing grants).
    pub fn grant(mut self, role: Role, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.grants.entry(role).or_default().extend(permissions);
        self
    }

    /// Restrict checks to the given entity names.
    pub fn with_known_entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_entities = Some(entities.into_iter().map(Into::into).collect());
        self
    }

    /// Effective permissions of a role set (deduplicated, sorted for readability).
    pub fn permissions_for(&self, roles: &[Role]) -> Vec<Permission> {
        let mut perms: Vec<Permission> = roles
            .iter()
            .filter_map(|r| self.grants.get(r))
            .flatten()
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        perms.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        perms
    }

    /// Capability checker bound to one session's roles.
    pub fn for_session<'a>(&'a self, session: &Session) -> SessionAccess<'a> {
        SessionAccess {
            policy: self,
            granted: self.permissions_for(session.roles()),
        }
    }

    fn ensure_known(&self, entity: &str) -> Result<(), AccessCheckError> {
        match &self.known_entities {
            Some(known) if !known.contains(entity) => {
                Err(AccessCheckError::UnknownEntity(entity.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// A [`RolePolicy`] resolved for a single session.
#[derive(Debug, Clone)]
pub struct SessionAccess<'a> {
    policy: &'a RolePolicy,
    granted: Vec<Permission>,
}

impl SessionAccess<'_> {
    pub fn granted(&self) -> &[Permission] {
        &self.granted
    }
}

impl AccessChecker for SessionAccess<'_> {
    fn has_access(
        &self,
        entity: &str,
        operation: AccessOperation,
        service: AccessService,
    ) -> Result<bool, AccessCheckError> {
        self.policy.ensure_known(entity)?;

        let required = Permission::for_access(entity, operation, service);
        let allowed = authorize(&self.granted, &required).is_ok();
        tracing::trace!(permission = %required, allowed, "capability check");
        Ok(allowed)
    }
}
