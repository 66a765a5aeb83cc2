use serde_json::Value;
use std::fmt;

/// Constraint on a single string field of a record
///
/// Length bounds are inclusive and counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
}

impl FieldRule {
    /// A required string field with no length bounds
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            min_len: None,
            max_len: None,
        }
    }

    /// An optional string field; when present it must still be a string
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            min_len: None,
            max_len: None,
        }
    }

    /// Restricts the field length to `min..=max` characters
    pub const fn length(self, min: usize, max: usize) -> Self {
        Self {
            min_len: Some(min),
            max_len: Some(max),
            ..self
        }
    }

    fn check(&self, value: Option<&Value>) -> Option<FieldErrorKind> {
        let text = match value {
            None | Some(Value::Null) => {
                return self.required.then_some(FieldErrorKind::Missing);
            }
            Some(Value::String(text)) => text,
            Some(other) => {
                return Some(FieldErrorKind::WrongType {
                    found: json_type_name(other),
                })
            }
        };

        if text.is_empty() && self.required {
            return Some(FieldErrorKind::Missing);
        }

        let len = text.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                return Some(FieldErrorKind::TooShort { min, len });
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                return Some(FieldErrorKind::TooLong { max, len });
            }
        }

        None
    }
}

/// Schema-constraint set for one entity type
#[derive(Debug)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: &'static [FieldRule],
}

impl Schema {
    /// Checks a candidate record against every rule in the schema
    ///
    /// All failing fields are reported, in schema order. Fields not named by
    /// the schema are ignored.
    ///
    /// # Example
    /// ```
    /// use company_api::domain::validation::{FieldRule, Schema};
    /// use serde_json::json;
    ///
    /// static SCHEMA: Schema = Schema {
    ///     entity: "Project",
    ///     fields: &[FieldRule::required("name").length(2, 8)],
    /// };
    ///
    /// assert!(SCHEMA.validate(&json!({ "name": "atlas" })).is_ok());
    /// assert!(SCHEMA.validate(&json!({})).is_err());
    /// ```
    pub fn validate(&self, candidate: &Value) -> Result<(), ValidationErrors> {
        let Some(object) = candidate.as_object() else {
            return Err(ValidationErrors::record(
                self.entity,
                FieldErrorKind::NotAnObject {
                    found: json_type_name(candidate),
                },
            ));
        };

        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|rule| {
                rule.check(object.get(rule.name)).map(|kind| FieldError {
                    field: rule.name.to_string(),
                    kind,
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                entity: self.entity,
                errors,
            })
        }
    }
}

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Required field is absent, null or empty
    Missing,
    /// Field is present but not a string
    WrongType { found: &'static str },
    /// Field is shorter than the minimum length
    TooShort { min: usize, len: usize },
    /// Field is longer than the maximum length
    TooLong { max: usize, len: usize },
    /// The candidate record itself is not a JSON object
    NotAnObject { found: &'static str },
    /// The record passed its rules but could not be read into its type
    Malformed(String),
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::Missing => write!(f, "is required"),
            FieldErrorKind::WrongType { found } => write!(f, "must be a string, got {}", found),
            FieldErrorKind::TooShort { min, len } => {
                write!(f, "must be at least {} characters, got {}", min, len)
            }
            FieldErrorKind::TooLong { max, len } => {
                write!(f, "must be at most {} characters, got {}", max, len)
            }
            FieldErrorKind::NotAnObject { found } => {
                write!(f, "record must be an object, got {}", found)
            }
            FieldErrorKind::Malformed(reason) => write!(f, "record is malformed: {}", reason),
        }
    }
}

/// A failing field and the reason it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.field, self.kind)
        }
    }
}

/// All validation failures for one candidate record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub entity: &'static str,
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// A single record-level failure
    pub fn record(entity: &'static str, kind: FieldErrorKind) -> Self {
        Self {
            entity,
            errors: vec![FieldError {
                field: String::new(),
                kind,
            }],
        }
    }

    /// Returns the failure recorded for `field`, if any
    pub fn field(&self, field: &str) -> Option<&FieldErrorKind> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.entity)?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static SCHEMA: Schema = Schema {
        entity: "Sample",
        fields: &[
            FieldRule::required("title").length(3, 6),
            FieldRule::optional("note"),
        ],
    };

    #[test]
    fn accepts_valid_candidate() {
        assert!(SCHEMA.validate(&json!({ "title": "abcd" })).is_ok());
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(SCHEMA.validate(&json!({ "title": "abc" })).is_ok());
        assert!(SCHEMA.validate(&json!({ "title": "abcdef" })).is_ok());
    }

    #[test]
    fn reports_too_short_and_too_long() {
        let err = SCHEMA.validate(&json!({ "title": "ab" })).unwrap_err();
        assert_eq!(
            err.field("title"),
            Some(&FieldErrorKind::TooShort { min: 3, len: 2 })
        );

        let err = SCHEMA.validate(&json!({ "title": "abcdefg" })).unwrap_err();
        assert_eq!(
            err.field("title"),
            Some(&FieldErrorKind::TooLong { max: 6, len: 7 })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(SCHEMA.validate(&json!({ "title": "żółw" })).is_ok());
    }

    #[test]
    fn null_and_empty_count_as_missing() {
        for candidate in [json!({}), json!({ "title": null }), json!({ "title": "" })] {
            let err = SCHEMA.validate(&candidate).unwrap_err();
            assert_eq!(err.field("title"), Some(&FieldErrorKind::Missing));
        }
    }

    #[test]
    fn rejects_non_string_values() {
        let err = SCHEMA.validate(&json!({ "title": [] })).unwrap_err();
        assert_eq!(
            err.field("title"),
            Some(&FieldErrorKind::WrongType { found: "array" })
        );

        let err = SCHEMA.validate(&json!({ "title": "abcd", "note": 7 })).unwrap_err();
        assert_eq!(
            err.field("note"),
            Some(&FieldErrorKind::WrongType { found: "number" })
        );
    }

    #[test]
    fn optional_field_may_be_absent_or_null() {
        assert!(SCHEMA.validate(&json!({ "title": "abcd", "note": null })).is_ok());
        assert!(SCHEMA.validate(&json!({ "title": "abcd", "note": "" })).is_ok());
    }

    #[test]
    fn rejects_non_object_candidate() {
        let err = SCHEMA.validate(&json!("title")).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(
            err.errors[0].kind,
            FieldErrorKind::NotAnObject { found: "string" }
        );
    }

    #[test]
    fn display_lists_every_failure() {
        let err = SCHEMA
            .validate(&json!({ "title": {}, "note": false }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sample validation failed: title: must be a string, got object; \
             note: must be a string, got boolean"
        );
    }
}
