use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Type tag for a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Email,
    Radio,
    Date,
    Textarea,
    Number,
    Select,
}

impl FieldType {
    /// Choice-like types carry an enumerated option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Select)
    }
}

/// Visibility of a field: either a plain flag, or a mapping from a
/// governing value to a condition string evaluated by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Visibility {
    Flag(bool),
    Conditional(HashMap<String, String>),
}

/// One selectable option of a choice-like field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumOption {
    pub label: String,
    pub value: String,
}

/// Numeric constraints for Number fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// 0 or 1 in authored data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_decimal: Option<u8>,
}

/// Prefill default applied before the user has entered anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefill {
    pub value: Value,
}

/// Nested display overrides for label and placeholder text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Free-form rendering properties passed through to the form renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Metadata recorded by the form builder that authored the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderMeta {
    #[serde(rename = "type")]
    pub builder_type: String,
}

/// One entry in a schema's `items` mapping, describing a single form
/// control's type and display/validation metadata.
///
/// Fields have no identity beyond their key in the mapping; `name` and
/// `key` are optional echoes written by some authoring tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<bool>,
    /// Display ordering within the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<EnumOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_constraints: Option<ValueConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefill: Option<Prefill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<FieldProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderMeta>,
}

impl Field {
    /// Creates a bare field of the given type with no metadata set.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            name: None,
            key: None,
            field_type,
            visible: None,
            rule: None,
            sequence: None,
            layout: None,
            label: None,
            placeholder: None,
            options: None,
            value_constraints: None,
            prefill: None,
            display: None,
            props: None,
            builder: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_tag_round_trip() {
        let field = Field::new(FieldType::Email);
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value, json!({"type": "Email"}));

        let back: Field = serde_json::from_value(value).unwrap();
        assert_eq!(back.field_type, FieldType::Email);
    }

    #[test]
    fn test_visibility_flag_and_conditional() {
        let flag: Visibility = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(flag, Visibility::Flag(true));

        let cond: Visibility =
            serde_json::from_value(json!({"plan": "plan == 'premium'"})).unwrap();
        match cond {
            Visibility::Conditional(map) => {
                assert_eq!(map.get("plan").unwrap(), "plan == 'premium'")
            }
            other => panic!("expected conditional visibility, got {:?}", other),
        }
    }

    #[test]
    fn test_props_keep_unknown_keys() {
        let field: Field = serde_json::from_value(json!({
            "type": "Text",
            "props": {"maxlength": 40, "autocomplete": "off"}
        }))
        .unwrap();

        let props = field.props.unwrap();
        assert_eq!(props.maxlength, Some(40));
        assert_eq!(props.extra.get("autocomplete").unwrap(), "off");
    }

    #[test]
    fn test_authored_field_round_trips() {
        let authored = json!({
            "name": "age",
            "key": "age",
            "type": "Number",
            "visible": true,
            "sequence": 3,
            "label": "Age",
            "value_constraints": {"maximum": 120.0, "allow_decimal": 0},
            "prefill": {"value": null}
        });

        let field: Field = serde_json::from_value(authored.clone()).unwrap();
        assert_eq!(serde_json::to_value(&field).unwrap(), authored);
    }
}
