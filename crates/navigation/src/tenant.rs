//! Tenant-aware resolution of the "Organization" entry.
//!
//! A tenant-scoped user (one holding a configured tenant-owner role) sees the
//! detail page of their tenant's organization instead of the listing. The
//! organization id comes from an async lookup that is only issued when the
//! session has a tenant key; until it resolves, the listing page is used.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use evalboard_auth::Session;
use evalboard_core::{OrganizationId, TenantId};

use crate::config::NavigationConfig;
use crate::directory::{LookupError, OrganizationDirectory};

/// Lookup state per tenant key.
///
/// `Unresolved → Loading → { Resolved | Failed }`. `Failed` resolves paths
/// exactly like `Unresolved` but stays distinguishable for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Unresolved,
    Loading,
    /// `None` when the tenant owns no organization (or the first has no id).
    Resolved(Option<OrganizationId>),
    Failed(LookupError),
}

impl LookupState {
    pub fn organization_id(&self) -> Option<&OrganizationId> {
        match self {
            LookupState::Resolved(Some(id)) => Some(id),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LookupState::Unresolved | LookupState::Loading)
    }
}

#[derive(Debug)]
struct Slot {
    state: LookupState,
    generation: u64,
}

/// Organization lookups cached per tenant id.
///
/// Each lookup writes only its own tenant's slot, and only if that slot has
/// not been invalidated or restarted since the lookup began; otherwise the
/// result is discarded as stale.
#[derive(Clone)]
pub struct OrganizationLookup {
    directory: Arc<dyn OrganizationDirectory>,
    slots: Arc<RwLock<HashMap<TenantId, Slot>>>,
    next_generation: Arc<AtomicU64>,
}

impl fmt::Debug for OrganizationLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrganizationLookup")
            .field("cached_tenants", &self.read().len())
            .finish_non_exhaustive()
    }
}

impl OrganizationLookup {
    pub fn new<D>(directory: D) -> Self
    where
        D: OrganizationDirectory + 'static,
    {
        Self::from_arc(Arc::new(directory))
    }

    pub fn from_arc(directory: Arc<dyn OrganizationDirectory>) -> Self {
        Self {
            directory,
            slots: Arc::new(RwLock::new(HashMap::new())),
            next_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current state for `key` without fetching.
    pub fn peek(&self, key: Option<&TenantId>) -> LookupState {
        key.and_then(|k| self.read().get(k).map(|slot| slot.state.clone()))
            .unwrap_or(LookupState::Unresolved)
    }

    /// Drive the lookup for `key` and return its settled state.
    ///
    /// With no key the directory is never called. A resolved key is served
    /// from cache; a key already loading is not fetched twice; a failed key
    /// is retried.
    pub async fn resolve(&self, key: Option<&TenantId>) -> LookupState {
        let Some(tenant_id) = key else {
            tracing::debug!("no tenant key; organization lookup skipped");
            return LookupState::Unresolved;
        };

        let generation = {
            let mut slots = self.write();
            if let Some(slot) = slots.get(tenant_id) {
                if matches!(slot.state, LookupState::Resolved(_) | LookupState::Loading) {
                    tracing::debug!(%tenant_id, state = ?slot.state, "organization lookup served from cache");
                    return slot.state.clone();
                }
            }
            let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
            slots.insert(
                tenant_id.clone(),
                Slot {
                    state: LookupState::Loading,
                    generation,
                },
            );
            generation
        };

        let pending = PendingSlot {
            slots: &self.slots,
            tenant_id,
            generation,
            settled: false,
        };

        tracing::debug!(%tenant_id, "organization lookup started");
        let state = match self.directory.list_organizations(tenant_id).await {
            Ok(organizations) => {
                LookupState::Resolved(organizations.into_iter().next().and_then(|o| o.id))
            }
            Err(err) => {
                tracing::warn!(%tenant_id, error = %err, "organization lookup failed; falling back to listing page");
                LookupState::Failed(err)
            }
        };
        pending.settle(state)
    }

    /// Forget the cached result for one tenant (e.g. after a session refresh).
    pub fn invalidate(&self, tenant_id: &TenantId) {
        self.write().remove(tenant_id);
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<TenantId, Slot>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TenantId, Slot>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The `Loading` slot owned by one in-flight lookup.
///
/// If the lookup future is dropped before it settles, the slot goes back to
/// unresolved so the next `resolve` fetches again.
struct PendingSlot<'a> {
    slots: &'a RwLock<HashMap<TenantId, Slot>>,
    tenant_id: &'a TenantId,
    generation: u64,
    settled: bool,
}

impl PendingSlot<'_> {
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TenantId, Slot>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn settle(mut self, state: LookupState) -> LookupState {
        self.settled = true;
        let tenant_id = self.tenant_id;
        let mut slots = self.write();
        match slots.get_mut(tenant_id) {
            Some(slot) if slot.generation == self.generation => {
                slot.state = state.clone();
                state
            }
            current => {
                tracing::warn!(%tenant_id, "discarding stale organization lookup result");
                current
                    .map(|slot| slot.state.clone())
                    .unwrap_or(LookupState::Unresolved)
            }
        }
    }
}

impl Drop for PendingSlot<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut slots = self.write();
        if slots
            .get(self.tenant_id)
            .is_some_and(|slot| slot.generation == self.generation)
        {
            tracing::debug!(tenant_id = %self.tenant_id, "organization lookup abandoned");
            slots.remove(self.tenant_id);
        }
    }
}

/// Per-session view of the tenant scope and its organization lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    is_tenant_scoped_user: bool,
    tenant_id: Option<TenantId>,
    resolved_organization_id: Option<OrganizationId>,
    state: LookupState,
}

impl TenantContext {
    /// Scope of `session`, with nothing looked up yet.
    pub fn for_session(session: &Session, config: &NavigationConfig) -> Self {
        Self {
            is_tenant_scoped_user: session.has_any_role(&config.tenant_roles),
            tenant_id: session.tenant_id().cloned(),
            resolved_organization_id: None,
            state: LookupState::Unresolved,
        }
    }

    /// Scope of `session` with whatever the lookup currently holds (never fetches).
    pub fn current(session: &Session, config: &NavigationConfig, lookup: &OrganizationLookup) -> Self {
        let ctx = Self::for_session(session, config);
        let state = lookup.peek(ctx.lookup_key());
        ctx.with_state(state)
    }

    /// Scope of `session` after driving its lookup to a settled state.
    pub async fn resolve(
        session: &Session,
        config: &NavigationConfig,
        lookup: &OrganizationLookup,
    ) -> Self {
        let ctx = Self::for_session(session, config);
        let state = lookup.resolve(ctx.lookup_key()).await;
        ctx.with_state(state)
    }

    /// The lookup key: present only for a tenant-scoped user with a tenant id.
    pub fn lookup_key(&self) -> Option<&TenantId> {
        if self.is_tenant_scoped_user {
            self.tenant_id.as_ref()
        } else {
            None
        }
    }

    /// Attach a lookup state. Ignored when the session has no lookup key.
    pub fn with_state(mut self, state: LookupState) -> Self {
        if self.lookup_key().is_none() {
            return self;
        }
        self.resolved_organization_id = state.organization_id().cloned();
        self.state = state;
        self
    }

    pub fn is_tenant_scoped_user(&self) -> bool {
        self.is_tenant_scoped_user
    }

    pub fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    pub fn resolved_organization_id(&self) -> Option<&OrganizationId> {
        self.resolved_organization_id.as_ref()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Effective path of the "Organization" entry.
    ///
    /// Never contains an unresolved id: anything short of a resolved id
    /// yields the listing page.
    pub fn organization_path(&self, config: &NavigationConfig) -> String {
        match (self.is_tenant_scoped_user, &self.resolved_organization_id) {
            (true, Some(id)) => config.organization_detail_path(id),
            _ => config.organizations_path.clone(),
        }
    }
}
