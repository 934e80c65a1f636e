use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Map;

use evalboard_core::{EmployeeId, Entity, EvaluationId};

use crate::employee::EmployeeRecord;
use crate::query::{ListQuery, push_filter};
use crate::schema::{FieldSpec, FormInput, FormSchema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEvaluationRecord {
    #[serde(default)]
    pub id: Option<EvaluationId>,
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub evaluation_data: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRecord>,
    /// Evaluations have no counted relations yet; kept open for the API's shape.
    #[serde(default, rename = "_count", skip_serializing_if = "Option::is_none")]
    pub count: Option<Map<String, serde_json::Value>>,
}

impl Entity for PerformanceEvaluationRecord {
    type Id = EvaluationId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEvaluationInput {
    #[serde(default)]
    pub evaluation_data: Option<String>,
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
}

impl FormInput for PerformanceEvaluationInput {
    const SCHEMA: FormSchema = FormSchema {
        name: "performance_evaluation",
        fields: &[
            FieldSpec::string("evaluation_data"),
            FieldSpec::id("employee_id").nullable(),
        ],
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEvaluationQuery {
    #[serde(flatten)]
    pub list: ListQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EvaluationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_data: Option<String>,
}

impl PerformanceEvaluationQuery {
    pub fn for_employee(employee_id: EmployeeId) -> Self {
        Self {
            employee_id: Some(employee_id),
            ..Self::default()
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.list.to_query_pairs();
        push_filter(&mut pairs, "id", self.id.as_ref().map(|v| v.as_str()));
        push_filter(
            &mut pairs,
            "employee_id",
            self.employee_id.as_ref().map(|v| v.as_str()),
        );
        push_filter(&mut pairs, "evaluation_data", self.evaluation_data.as_deref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evalboard_core::FieldViolation;
    use serde_json::json;

    #[test]
    fn form_reports_every_bad_field() {
        let err = PerformanceEvaluationInput::from_form(json!({
            "evaluation_data": ["a"],
            "employee_id": {},
        }))
        .unwrap_err();

        assert_eq!(
            err.violations(),
            &[
                FieldViolation::new("evaluation_data", "must be a string"),
                FieldViolation::new("employee_id", "must be a string"),
            ]
        );
    }

    #[test]
    fn form_casts_numbers_and_clears_empty_employee() {
        let input = PerformanceEvaluationInput::from_form(json!({
            "evaluation_data": 4.5,
            "employee_id": "",
        }))
        .unwrap();

        assert_eq!(input.evaluation_data.as_deref(), Some("4.5"));
        assert!(input.employee_id.is_none());
    }

    #[test]
    fn form_builds_typed_input() {
        let input = PerformanceEvaluationInput::from_form(json!({
            "evaluation_data": "exceeds expectations",
            "employee_id": "E1",
        }))
        .unwrap();

        assert_eq!(input.employee_id.unwrap().as_str(), "E1");
    }

    #[test]
    fn record_embeds_employee() {
        let rec: PerformanceEvaluationRecord = serde_json::from_value(json!({
            "id": "PE1",
            "employee_id": "E1",
            "employee": { "id": "E1" },
            "_count": {},
        }))
        .unwrap();

        assert!(rec.is_persisted());
        assert_eq!(
            rec.employee.and_then(|e| e.id).map(String::from).as_deref(),
            Some("E1")
        );
        assert_eq!(rec.count.map(|c| c.len()), Some(0));
    }

    #[test]
    fn employee_filter_becomes_query_pair() {
        let q = PerformanceEvaluationQuery::for_employee(EmployeeId::new("E1").unwrap());
        assert_eq!(
            q.to_query_pairs(),
            vec![("employee_id".to_string(), "E1".to_string())]
        );
    }
}
