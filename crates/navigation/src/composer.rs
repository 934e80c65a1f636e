//! Final assembly of the sidebar entries.

use serde::Serialize;

use evalboard_auth::{AccessCheckError, AccessChecker, Session};

use crate::config::NavigationConfig;
use crate::entry::{NavigationCatalog, NavigationEntry};
use crate::filter::filter_visible;
use crate::route::is_active;
use crate::tenant::{OrganizationLookup, TenantContext};

/// A visible entry annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveEntry {
    pub entry: NavigationEntry,
    pub is_active: bool,
}

/// Builds the visible, annotated navigation for one session.
#[derive(Debug, Clone, Default)]
pub struct NavigationComposer {
    catalog: NavigationCatalog,
    config: NavigationConfig,
}

impl NavigationComposer {
    pub fn new(catalog: NavigationCatalog, config: NavigationConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &NavigationCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Compose from whatever the lookup currently holds.
    ///
    /// Never waits: a pending organization lookup renders the listing page.
    pub fn compose_now<C>(
        &self,
        session: &Session,
        checker: &C,
        lookup: &OrganizationLookup,
        current_path: &str,
    ) -> Result<Vec<ActiveEntry>, AccessCheckError>
    where
        C: AccessChecker + ?Sized,
    {
        let tenant = TenantContext::current(session, &self.config, lookup);
        self.compose_with(&tenant, checker, current_path)
    }

    /// Drive the session's organization lookup, then compose.
    ///
    /// Lookup failures degrade to the listing page; only capability-check
    /// failures are returned.
    pub async fn compose<C>(
        &self,
        session: &Session,
        checker: &C,
        lookup: &OrganizationLookup,
        current_path: &str,
    ) -> Result<Vec<ActiveEntry>, AccessCheckError>
    where
        C: AccessChecker + ?Sized,
    {
        let tenant = TenantContext::resolve(session, &self.config, lookup).await;
        self.compose_with(&tenant, checker, current_path)
    }

    /// Compose against an explicit tenant context.
    pub fn compose_with<C>(
        &self,
        tenant: &TenantContext,
        checker: &C,
        current_path: &str,
    ) -> Result<Vec<ActiveEntry>, AccessCheckError>
    where
        C: AccessChecker + ?Sized,
    {
        let organization_path = tenant.organization_path(&self.config);
        let candidates = self.catalog.entries().iter().map(|entry| {
            if entry.is_organization() {
                entry.with_path(organization_path.clone())
            } else {
                entry.clone()
            }
        });

        let visible = filter_visible(candidates, checker)?;
        tracing::debug!(
            visible = visible.len(),
            total = self.catalog.entries().len(),
            lookup = ?tenant.state(),
            "navigation composed"
        );

        Ok(visible
            .into_iter()
            .map(|entry| ActiveEntry {
                is_active: is_active(current_path, &entry.path),
                entry,
            })
            .collect())
    }
}
