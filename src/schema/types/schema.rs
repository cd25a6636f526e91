use super::fields::Field;
use crate::constants::{DEFAULT_EXPORT_NAME, EXPORT_SUFFIX};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The root document describing a form: its machine name, display
/// label and the mapping of field keys to field definitions.
///
/// Schemas are authored externally and read/written wholesale; the
/// store never merges them field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub name: String,
    pub label: String,
    pub items: HashMap<String, Field>,
    /// Open mapping for authoring-tool metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, Value>>,
}

impl FormSchema {
    pub fn new(name: String, label: String) -> Self {
        Self {
            name,
            label,
            items: HashMap::new(),
            meta: None,
        }
    }

    pub fn add_item(&mut self, key: String, field: Field) {
        self.items.insert(key, field);
    }

    /// Filename used when exporting this schema as a backup.
    pub fn export_file_name(&self) -> String {
        let stem = if self.name.is_empty() {
            DEFAULT_EXPORT_NAME
        } else {
            self.name.as_str()
        };
        format!("{}{}.json", stem, EXPORT_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldType;

    #[test]
    fn test_export_file_name() {
        let schema = FormSchema::new("contact".to_string(), "Contact".to_string());
        assert_eq!(schema.export_file_name(), "contact_backup.json");

        let unnamed = FormSchema::new(String::new(), "Unnamed".to_string());
        assert_eq!(unnamed.export_file_name(), "schema_backup.json");
    }

    #[test]
    fn test_meta_is_omitted_when_absent() {
        let mut schema = FormSchema::new("contact".to_string(), "Contact".to_string());
        schema.add_item("email".to_string(), Field::new(FieldType::Email));

        let value = serde_json::to_value(&schema).unwrap();
        assert!(value.get("meta").is_none());
        assert!(value["items"]["email"].is_object());
    }
}
