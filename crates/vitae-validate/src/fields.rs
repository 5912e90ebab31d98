//! Typed field lookups over raw JSON
//!
//! Each lookup reports at most one error for the field it inspects and
//! returns `None` when the caller must not descend into the value.

use serde_json::{Map, Value};

use crate::error::FieldError;
use crate::formats::Format;
use crate::path::FieldPath;

/// A JSON object under inspection together with its location
pub(crate) struct Object<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

/// JSON type name as reported in type mismatch messages
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> Object<'a> {
    /// View `value` as an object, reporting a mismatch at `path` otherwise
    pub(crate) fn expect(
        value: &'a Value,
        path: FieldPath,
        errors: &mut Vec<FieldError>,
    ) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self { map, path }),
            other => {
                errors.push(FieldError::type_mismatch(&path, "object", type_name(other)));
                None
            }
        }
    }

    /// Path of a member of this object
    pub(crate) fn path_of(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    /// Check if the object has a member, whatever its type
    pub(crate) fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Look up a member, reporting `Required` when it is absent
    fn member(&self, key: &str, errors: &mut Vec<FieldError>) -> Option<&'a Value> {
        let value = self.map.get(key);
        if value.is_none() {
            errors.push(FieldError::required(&self.path_of(key)));
        }
        value
    }

    /// Required string member
    pub(crate) fn string(&self, key: &str, errors: &mut Vec<FieldError>) -> Option<&'a str> {
        match self.member(key, errors)? {
            Value::String(s) => Some(s.as_str()),
            other => {
                errors.push(FieldError::type_mismatch(
                    &self.path_of(key),
                    "string",
                    type_name(other),
                ));
                None
            }
        }
    }

    /// Required string member that must also satisfy `format`
    pub(crate) fn formatted(&self, key: &str, format: Format, errors: &mut Vec<FieldError>) {
        if let Some(value) = self.string(key, errors) {
            if !format.accepts(value) {
                errors.push(FieldError::new(&self.path_of(key), format.message()));
            }
        }
    }

    /// Optional string member; `None` when absent or mistyped
    pub(crate) fn optional_string(
        &self,
        key: &str,
        errors: &mut Vec<FieldError>,
    ) -> Option<&'a str> {
        if self.has(key) {
            self.string(key, errors)
        } else {
            None
        }
    }

    /// Required object member
    pub(crate) fn object(&self, key: &str, errors: &mut Vec<FieldError>) -> Option<Object<'a>> {
        let value = self.member(key, errors)?;
        Object::expect(value, self.path_of(key), errors)
    }

    /// Required array member; runs `check` on every element in index order
    pub(crate) fn array<F>(&self, key: &str, errors: &mut Vec<FieldError>, mut check: F)
    where
        F: FnMut(&'a Value, FieldPath, &mut Vec<FieldError>),
    {
        let Some(value) = self.member(key, errors) else {
            return;
        };
        let path = self.path_of(key);
        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    check(item, path.index(index), errors);
                }
            }
            other => errors.push(FieldError::type_mismatch(&path, "array", type_name(other))),
        }
    }

    /// Required array of strings
    pub(crate) fn string_array(&self, key: &str, errors: &mut Vec<FieldError>) {
        self.array(key, errors, |item, path, errors| {
            if !item.is_string() {
                errors.push(FieldError::type_mismatch(&path, "string", type_name(item)));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run<F>(value: Value, f: F) -> Vec<FieldError>
    where
        F: FnOnce(&Object<'_>, &mut Vec<FieldError>),
    {
        let mut errors = Vec::new();
        let obj = Object::expect(&value, FieldPath::root(), &mut errors).unwrap();
        f(&obj, &mut errors);
        errors
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(1.5)), "number");
        assert_eq!(type_name(&json!([])), "array");
    }

    #[test]
    fn test_missing_string_is_required() {
        let errors = run(json!({}), |o, e| {
            o.string("name", e);
        });
        assert_eq!(errors, vec![FieldError::required(&FieldPath::root().key("name"))]);
    }

    #[test]
    fn test_null_string_is_mismatch() {
        let errors = run(json!({ "name": null }), |o, e| {
            o.string("name", e);
        });
        assert_eq!(errors[0].message, "Expected string, received null");
    }

    #[test]
    fn test_formatted_reports_format_message() {
        let errors = run(json!({ "email": "nope" }), |o, e| {
            o.formatted("email", Format::Email, e);
        });
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "email");
        assert_eq!(errors[0].message, "Invalid email");
    }

    #[test]
    fn test_optional_string() {
        let errors = run(json!({}), |o, e| {
            assert!(o.optional_string("pdf", e).is_none());
        });
        assert!(errors.is_empty());

        let errors = run(json!({ "pdf": 3 }), |o, e| {
            assert!(o.optional_string("pdf", e).is_none());
        });
        assert_eq!(errors[0].message, "Expected string, received number");
    }

    #[test]
    fn test_wrong_typed_array_skips_elements() {
        let errors = run(json!({ "skills": "rust, go" }), |o, e| o.string_array("skills", e));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Expected array, received string");
    }

    #[test]
    fn test_string_array_element_paths() {
        let errors = run(json!({ "skills": ["rust", 7, "go", false] }), |o, e| {
            o.string_array("skills", e)
        });
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["skills[1]", "skills[3]"]);
    }
}
