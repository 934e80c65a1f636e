//! Organization-listing collaborator.

use std::sync::{Mutex, PoisonError, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use evalboard_core::TenantId;
use evalboard_records::{OrganizationQuery, OrganizationRecord};

/// The organization listing could not be produced.
///
/// Lookups are best-effort: callers fall back to the listing page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("organization service unavailable: {0}")]
    Unavailable(String),

    #[error("organization lookup rejected: {0}")]
    Rejected(String),
}

/// Lists the organizations owned by a tenant.
///
/// Implementations own any retry policy; the navigation layer issues one
/// call per tenant key and never retries on its own.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    async fn list_organizations(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<OrganizationRecord>, LookupError>;
}

/// In-memory directory for tests/dev. Records every call it receives.
#[derive(Debug, Default)]
pub struct InMemoryOrganizationDirectory {
    organizations: RwLock<Vec<OrganizationRecord>>,
    failure: RwLock<Option<LookupError>>,
    calls: Mutex<Vec<TenantId>>,
}

impl InMemoryOrganizationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organizations(organizations: impl IntoIterator<Item = OrganizationRecord>) -> Self {
        Self {
            organizations: RwLock::new(organizations.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn insert(&self, organization: OrganizationRecord) {
        self.organizations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(organization);
    }

    /// Make every subsequent call fail with `error` (`None` restores success).
    pub fn fail_with(&self, error: Option<LookupError>) {
        *self.failure.write().unwrap_or_else(PoisonError::into_inner) = error;
    }

    /// Tenant ids this directory was queried with, in call order.
    pub fn calls(&self) -> Vec<TenantId> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl OrganizationDirectory for InMemoryOrganizationDirectory {
    async fn list_organizations(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<OrganizationRecord>, LookupError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tenant_id.clone());

        if let Some(err) = self
            .failure
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(err);
        }

        let query = OrganizationQuery::for_tenant(tenant_id.clone());
        Ok(self
            .organizations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|o| query.matches(o))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evalboard_core::OrganizationId;

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    fn org(id: &str, tenant_id: &str) -> OrganizationRecord {
        OrganizationRecord::new(OrganizationId::new(id).unwrap(), tenant(tenant_id))
    }

    #[tokio::test]
    async fn lists_only_the_tenant_organizations() {
        let dir = InMemoryOrganizationDirectory::with_organizations([
            org("O1", "T1"),
            org("O9", "T2"),
            org("O2", "T1"),
        ]);

        let orgs = dir.list_organizations(&tenant("T1")).await.unwrap();
        let ids: Vec<String> = orgs.into_iter().filter_map(|o| o.id).map(String::from).collect();

        assert_eq!(ids, vec!["O1", "O2"]);
        assert_eq!(dir.calls(), vec![tenant("T1")]);
    }

    #[tokio::test]
    async fn injected_failure_is_returned_and_recorded() {
        let dir = InMemoryOrganizationDirectory::new();
        dir.fail_with(Some(LookupError::Unavailable("503".to_string())));

        let err = dir.list_organizations(&tenant("T1")).await.unwrap_err();
        assert_eq!(err, LookupError::Unavailable("503".to_string()));
        assert_eq!(dir.calls().len(), 1);

        dir.fail_with(None);
        dir.insert(org("O1", "T1"));
        assert_eq!(dir.list_organizations(&tenant("T1")).await.unwrap().len(), 1);
    }
}
