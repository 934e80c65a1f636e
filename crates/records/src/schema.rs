//! Declarative form schemas.
//!
//! A schema is a static list of fields. Validation walks the submitted JSON
//! object once and reports every violation together, so a form can highlight
//! all bad fields in one round trip.

use serde::de::DeserializeOwned;
use serde_json::Value;

use evalboard_core::{DomainError, DomainResult, FieldViolation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text (may be empty).
    String,
    /// Reference to another record. A blank value means "none selected".
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// `null` is accepted.
    pub nullable: bool,
    /// The key must be present.
    pub required: bool,
}

impl FieldSpec {
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            nullable: false,
            required: false,
        }
    }

    pub const fn id(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Id,
            nullable: false,
            required: false,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Cast a submitted value the way the browser form library does:
    /// numbers and booleans become strings, and a blank reference counts
    /// as "no selection" (`null`).
    fn cast(&self, value: Option<Value>) -> Result<Option<Value>, FieldViolation> {
        let value = match value {
            None if self.required => return Err(FieldViolation::new(self.name, "is required")),
            None => return Ok(None),
            Some(Value::Number(n)) => Value::String(n.to_string()),
            Some(Value::Bool(b)) => Value::String(b.to_string()),
            Some(v) => v,
        };

        let value = match value {
            Value::String(s) if self.kind == FieldKind::Id && s.trim().is_empty() => Value::Null,
            v => v,
        };

        match value {
            Value::Null if self.nullable => Ok(Some(Value::Null)),
            Value::Null if self.kind == FieldKind::Id => Err(FieldViolation::new(
                self.name,
                "must be a non-empty identifier",
            )),
            Value::Null => Err(FieldViolation::new(self.name, "must not be null")),
            v @ Value::String(_) => Ok(Some(v)),
            _ => Err(FieldViolation::new(self.name, "must be a string")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a submitted payload. Keys not declared by the schema are ignored.
    pub fn validate(&self, payload: &Value) -> DomainResult<()> {
        self.cast(payload.clone()).map(|_| ())
    }

    /// Validate `payload` and return it with every declared field cast to its
    /// canonical form. Undeclared keys pass through untouched.
    pub fn cast(&self, payload: Value) -> DomainResult<Value> {
        let Value::Object(mut map) = payload else {
            return Err(DomainError::validation(format!(
                "{} form payload must be an object",
                self.name
            )));
        };

        let mut violations = Vec::new();
        for field in self.fields {
            match field.cast(map.remove(field.name)) {
                Ok(Some(v)) => {
                    map.insert(field.name.to_string(), v);
                }
                Ok(None) => {}
                Err(violation) => violations.push(violation),
            }
        }

        if violations.is_empty() {
            Ok(Value::Object(map))
        } else {
            Err(DomainError::InvalidForm(violations))
        }
    }
}

/// A typed form input guarded by a schema.
pub trait FormInput: DeserializeOwned {
    const SCHEMA: FormSchema;

    /// Cast `payload` through [`Self::SCHEMA`], then deserialize it.
    fn from_form(payload: Value) -> DomainResult<Self> {
        let payload = Self::SCHEMA.cast(payload)?;
        serde_json::from_value(payload).map_err(|e| {
            DomainError::validation(format!("{} form: {}", Self::SCHEMA.name, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const SCHEMA: FormSchema = FormSchema {
        name: "sample",
        fields: &[
            FieldSpec::string("notes"),
            FieldSpec::id("owner_id").nullable(),
            FieldSpec::string("title").required(),
        ],
    };

    #[test]
    fn accepts_well_formed_payload() {
        let payload = json!({ "notes": "", "owner_id": null, "title": "t", "extra": 5 });
        assert!(SCHEMA.validate(&payload).is_ok());
    }

    #[test]
    fn reports_all_violations_at_once() {
        let payload = json!({ "notes": null, "owner_id": [], "extra": 5 });
        let err = SCHEMA.validate(&payload).unwrap_err();

        assert_eq!(
            err.violations(),
            &[
                FieldViolation::new("notes", "must not be null"),
                FieldViolation::new("owner_id", "must be a string"),
                FieldViolation::new("title", "is required"),
            ]
        );
    }

    #[test]
    fn rejects_non_object_payloads() {
        let err = SCHEMA.validate(&json!(["title"])).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("sample form payload must be an object".to_string())
        );
    }

    #[test]
    fn rejects_wrong_types() {
        let err = SCHEMA.validate(&json!({ "title": { "text": "t" } })).unwrap_err();
        assert_eq!(err.violations(), &[FieldViolation::new("title", "must be a string")]);
    }

    #[test]
    fn casts_scalars_to_strings() {
        let cast = SCHEMA.cast(json!({ "title": 3, "notes": true, "extra": 5 })).unwrap();
        assert_eq!(cast, json!({ "title": "3", "notes": "true", "extra": 5 }));
    }

    #[test]
    fn blank_reference_means_none_selected() {
        let cast = SCHEMA.cast(json!({ "title": "t", "owner_id": "" })).unwrap();
        assert_eq!(cast["owner_id"], Value::Null);

        const STRICT: FormSchema = FormSchema {
            name: "strict",
            fields: &[FieldSpec::id("owner_id")],
        };
        let err = STRICT.validate(&json!({ "owner_id": " " })).unwrap_err();
        assert_eq!(
            err.violations(),
            &[FieldViolation::new("owner_id", "must be a non-empty identifier")]
        );
    }

    proptest! {
        /// Any string is acceptable free text.
        #[test]
        fn any_text_is_valid_free_text(notes in ".*", title in ".*") {
            let payload = json!({ "notes": notes, "title": title });
            prop_assert!(SCHEMA.validate(&payload).is_ok());
        }
    }
}
