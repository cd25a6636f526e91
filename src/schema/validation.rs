//! Schema validation logic and validator interface
//!
//! This module contains the validation functionality for schemas including:
//! - Declared shape contract applied to raw import documents
//! - Typed validation of parsed schemas
//! - Field-level integrity checks

use crate::schema::types::{FormSchema, SchemaError};
use serde_json::Value;

/// Declared shape contract for a schema document, checked against the
/// raw JSON value before deserialization. The required-field list is
/// explicit so the contract is testable independent of the store.
pub struct SchemaShape {
    required_string_fields: &'static [&'static str],
}

/// Shape applied to user-supplied import documents.
pub const IMPORT_SHAPE: SchemaShape = SchemaShape {
    required_string_fields: &["name", "label"],
};

impl SchemaShape {
    /// Checks a raw JSON document against this shape.
    pub fn check(&self, value: &Value) -> Result<(), SchemaError> {
        let obj = value.as_object().ok_or_else(|| {
            SchemaError::Validation("schema document must be a JSON object".to_string())
        })?;

        for field in self.required_string_fields {
            match obj.get(*field) {
                Some(Value::String(s)) if !s.is_empty() => {}
                _ => {
                    return Err(SchemaError::Validation(format!(
                        "missing or empty required field '{}'",
                        field
                    )))
                }
            }
        }

        match obj.get("items") {
            Some(Value::Object(_)) => Ok(()),
            Some(Value::Array(_)) => Err(SchemaError::Validation(
                "'items' must be an object, not an array".to_string(),
            )),
            _ => Err(SchemaError::Validation(
                "'items' must be an object".to_string(),
            )),
        }
    }
}

/// Schema validator that provides validation services for schemas
pub struct SchemaValidator;

impl SchemaValidator {
    /// Create a new schema validator
    pub fn new() -> Self {
        Self
    }

    /// Checks a raw import document against the declared import shape.
    pub fn validate_document(&self, value: &Value) -> Result<(), SchemaError> {
        IMPORT_SHAPE.check(value)
    }

    /// Validate a parsed schema
    pub fn validate(&self, schema: &FormSchema) -> Result<(), SchemaError> {
        if schema.name.is_empty() {
            return Err(SchemaError::InvalidField(
                "Schema name cannot be empty".to_string(),
            ));
        }

        if schema.label.is_empty() {
            return Err(SchemaError::InvalidField(
                "Schema label cannot be empty".to_string(),
            ));
        }

        for (key, field) in &schema.items {
            if key.is_empty() {
                return Err(SchemaError::InvalidField(
                    "Item key cannot be empty".to_string(),
                ));
            }

            if field.field_type.is_choice() {
                let has_options = field
                    .options
                    .as_ref()
                    .map(|options| !options.is_empty())
                    .unwrap_or(false);
                if !has_options {
                    return Err(SchemaError::InvalidField(format!(
                        "Choice field '{}' must define at least one option",
                        key
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{EnumOption, Field, FieldType};
    use serde_json::json;

    #[test]
    fn test_shape_accepts_minimal_document() {
        let doc = json!({"name": "A", "label": "B", "items": {}});
        assert!(IMPORT_SHAPE.check(&doc).is_ok());
    }

    #[test]
    fn test_shape_rejects_missing_label_and_items() {
        let doc = json!({"name": "x"});
        let err = IMPORT_SHAPE.check(&doc).unwrap_err();
        assert!(err.to_string().contains("label"));
    }

    #[test]
    fn test_shape_rejects_empty_name() {
        let doc = json!({"name": "", "label": "B", "items": {}});
        assert!(IMPORT_SHAPE.check(&doc).is_err());
    }

    #[test]
    fn test_shape_rejects_array_items() {
        let doc = json!({"name": "A", "label": "B", "items": []});
        let err = IMPORT_SHAPE.check(&doc).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_shape_rejects_non_object_document() {
        assert!(IMPORT_SHAPE.check(&json!([1, 2, 3])).is_err());
        assert!(IMPORT_SHAPE.check(&json!("schema")).is_err());
    }

    #[test]
    fn test_validate_rejects_choice_field_without_options() {
        let mut schema = FormSchema::new("poll".to_string(), "Poll".to_string());
        schema.add_item("color".to_string(), Field::new(FieldType::Radio));

        let validator = SchemaValidator::new();
        assert!(validator.validate(&schema).is_err());

        let mut field = Field::new(FieldType::Radio);
        field.options = Some(vec![EnumOption {
            label: "Red".to_string(),
            value: "red".to_string(),
        }]);
        schema.add_item("color".to_string(), field);
        assert!(validator.validate(&schema).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_item_key() {
        let mut schema = FormSchema::new("poll".to_string(), "Poll".to_string());
        schema.add_item(String::new(), Field::new(FieldType::Text));

        assert!(SchemaValidator::new().validate(&schema).is_err());
    }
}
