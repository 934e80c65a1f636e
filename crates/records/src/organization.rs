use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use evalboard_core::{Entity, OrganizationId, TenantId};

use crate::query::{ListQuery, push_filter};

/// An organization owned by a tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    #[serde(default)]
    pub id: Option<OrganizationId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrganizationRecord {
    pub fn new(id: OrganizationId, tenant_id: TenantId) -> Self {
        Self {
            id: Some(id),
            tenant_id: Some(tenant_id),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Entity for OrganizationRecord {
    type Id = OrganizationId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationQuery {
    #[serde(flatten)]
    pub list: ListQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OrganizationQuery {
    pub fn for_tenant(tenant_id: TenantId) -> Self {
        Self {
            tenant_id: Some(tenant_id),
            ..Self::default()
        }
    }

    /// Whether `record` satisfies the equality filters of this query.
    pub fn matches(&self, record: &OrganizationRecord) -> bool {
        let tenant_ok = self
            .tenant_id
            .as_ref()
            .is_none_or(|t| record.tenant_id.as_ref() == Some(t));
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|n| record.name.as_deref() == Some(n));
        tenant_ok && name_ok
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.list.to_query_pairs();
        push_filter(&mut pairs, "tenant_id", self.tenant_id.as_ref().map(|t| t.as_str()));
        push_filter(&mut pairs, "name", self.name.as_deref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    #[test]
    fn tenant_filter_matches_only_that_tenant() {
        let q = OrganizationQuery::for_tenant(tenant("T1"));
        let own = OrganizationRecord::new(OrganizationId::new("O1").unwrap(), tenant("T1"));
        let other = OrganizationRecord::new(OrganizationId::new("O9").unwrap(), tenant("T2"));

        assert!(q.matches(&own));
        assert!(!q.matches(&other));
        assert!(OrganizationQuery::default().matches(&other));
    }

    #[test]
    fn tenant_filter_becomes_query_pair() {
        let q = OrganizationQuery::for_tenant(tenant("T1"));
        assert_eq!(
            q.to_query_pairs(),
            vec![("tenant_id".to_string(), "T1".to_string())]
        );
    }

    #[test]
    fn partial_projection_deserializes() {
        let rec: OrganizationRecord = serde_json::from_str(r#"{ "id": "O1" }"#).unwrap();
        assert!(rec.is_persisted());
        assert!(rec.tenant_id.is_none());
    }
}
