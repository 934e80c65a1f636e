use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use evalboard_core::{EmployeeId, Entity, OrganizationId, UserId};

use crate::organization::OrganizationRecord;
use crate::query::{ListQuery, push_filter};
use crate::schema::{FieldSpec, FormInput, FormSchema};
use crate::user::UserRecord;

/// Relation counts embedded by the listing API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCount {
    #[serde(default)]
    pub performance_evaluation: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub time_tracking_data: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub organization_id: Option<OrganizationId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationRecord>,
    #[serde(default, rename = "_count", skip_serializing_if = "Option::is_none")]
    pub count: Option<EmployeeCount>,
}

impl Entity for EmployeeRecord {
    type Id = EmployeeId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

/// Create/edit payload for an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default)]
    pub time_tracking_data: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub organization_id: Option<OrganizationId>,
}

impl FormInput for EmployeeInput {
    const SCHEMA: FormSchema = FormSchema {
        name: "employee",
        fields: &[
            FieldSpec::string("time_tracking_data"),
            FieldSpec::id("user_id").nullable(),
            FieldSpec::id("organization_id").nullable(),
        ],
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeQuery {
    #[serde(flatten)]
    pub list: ListQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<OrganizationId>,
}

impl EmployeeQuery {
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.list.to_query_pairs();
        push_filter(&mut pairs, "id", self.id.as_ref().map(|v| v.as_str()));
        push_filter(&mut pairs, "time_tracking_data", self.time_tracking_data.as_deref());
        push_filter(&mut pairs, "user_id", self.user_id.as_ref().map(|v| v.as_str()));
        push_filter(
            &mut pairs,
            "organization_id",
            self.organization_id.as_ref().map(|v| v.as_str()),
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evalboard_core::{DomainError, FieldViolation};
    use serde_json::json;

    #[test]
    fn form_accepts_null_references() {
        let input = EmployeeInput::from_form(json!({
            "time_tracking_data": "40h",
            "user_id": null,
            "organization_id": "O1",
        }))
        .unwrap();

        assert_eq!(input.time_tracking_data.as_deref(), Some("40h"));
        assert!(input.user_id.is_none());
        assert_eq!(input.organization_id.unwrap().as_str(), "O1");
    }

    #[test]
    fn form_rejects_null_time_tracking() {
        let err = EmployeeInput::from_form(json!({ "time_tracking_data": null })).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidForm(vec![FieldViolation::new(
                "time_tracking_data",
                "must not be null"
            )])
        );
    }

    #[test]
    fn empty_select_submits_no_reference() {
        let input = EmployeeInput::from_form(json!({
            "time_tracking_data": 8,
            "user_id": "",
            "organization_id": "O1",
        }))
        .unwrap();

        assert_eq!(input.time_tracking_data.as_deref(), Some("8"));
        assert!(input.user_id.is_none());
        assert_eq!(input.organization_id.unwrap().as_str(), "O1");
    }

    #[test]
    fn empty_form_is_valid() {
        assert_eq!(EmployeeInput::from_form(json!({})).unwrap(), EmployeeInput::default());
    }

    #[test]
    fn record_reads_count_and_relations() {
        let rec: EmployeeRecord = serde_json::from_value(json!({
            "id": "E1",
            "user_id": "u-1",
            "user": { "id": "u-1", "email": "a@b.c" },
            "_count": { "performance_evaluation": 3 },
        }))
        .unwrap();

        assert_eq!(rec.count.and_then(|c| c.performance_evaluation), Some(3));
        assert_eq!(rec.user.and_then(|u| u.display_name()).as_deref(), Some("a@b.c"));
        assert!(rec.organization.is_none());
    }

    #[test]
    fn query_filters_follow_list_params() {
        let q = EmployeeQuery {
            list: ListQuery::page(10, 0),
            organization_id: Some(OrganizationId::new("O1").unwrap()),
            ..EmployeeQuery::default()
        };

        assert_eq!(
            q.to_query_pairs(),
            vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("organization_id".to_string(), "O1".to_string()),
            ]
        );
    }
}
