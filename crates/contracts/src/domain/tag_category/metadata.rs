use serde::{Deserialize, Serialize};

/// Input control type for `input` metadata fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Number,
    Date,
    Email,
    Password,
}

impl InputType {
    /// Wire code, also used as the HTML `type` attribute
    pub fn code(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Date => "date",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

/// One fixed choice of an options-mode select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// How a `select` metadata field sources its choices
///
/// `query` mode carries only a source identifier; nothing ever resolves it.
/// It stays a descriptor-level placeholder until a real source exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SelectMode {
    Options {
        #[serde(default)]
        options: Vec<SelectOption>,
        #[serde(default)]
        multiple: bool,
    },
    Query { query: String },
}

/// Schema entry describing one control of a category's dynamic sub-form.
///
/// Discriminated by the `component` tag on the wire; every consumer matches
/// exhaustively on the variant instead of probing for shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "lowercase")]
pub enum MetadataField {
    Input {
        key: String,
        label: String,
        #[serde(default)]
        required: bool,
        #[serde(rename = "type")]
        input_type: InputType,
        #[serde(default, rename = "readOnly")]
        read_only: bool,
    },
    Select {
        key: String,
        label: String,
        #[serde(default)]
        required: bool,
        #[serde(flatten)]
        mode: SelectMode,
    },
}

impl MetadataField {
    /// Key of the field, unique within its owning config
    pub fn key(&self) -> &str {
        match self {
            MetadataField::Input { key, .. } => key,
            MetadataField::Select { key, .. } => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MetadataField::Input { label, .. } => label,
            MetadataField::Select { label, .. } => label,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            MetadataField::Input { required, .. } => *required,
            MetadataField::Select { required, .. } => *required,
        }
    }
}

/// First duplicated key in a config, if any
pub fn duplicate_key(config: &[MetadataField]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    config
        .iter()
        .map(|field| field.key())
        .find(|key| !seen.insert(*key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_input_field() {
        let json = r#"{
            "component": "input",
            "key": "jersey",
            "label": "Jersey Number",
            "required": true,
            "type": "number",
            "readOnly": false
        }"#;
        let field: MetadataField = serde_json::from_str(json).unwrap();
        match field {
            MetadataField::Input {
                ref key,
                input_type,
                required,
                ..
            } => {
                assert_eq!(key, "jersey");
                assert_eq!(input_type, InputType::Number);
                assert!(required);
            }
            MetadataField::Select { .. } => panic!("expected input variant"),
        }
    }

    #[test]
    fn test_decode_select_options_field() {
        let json = r#"{
            "component": "select",
            "key": "side",
            "label": "Side",
            "mode": "options",
            "multiple": true,
            "options": [
                { "label": "Home", "value": "home" },
                { "label": "Away", "value": "away" }
            ]
        }"#;
        let field: MetadataField = serde_json::from_str(json).unwrap();
        match field {
            MetadataField::Select { mode, .. } => match mode {
                SelectMode::Options { options, multiple } => {
                    assert!(multiple);
                    assert_eq!(options.len(), 2);
                    assert_eq!(options[0].value, "home");
                }
                SelectMode::Query { .. } => panic!("expected options mode"),
            },
            MetadataField::Input { .. } => panic!("expected select variant"),
        }
    }

    #[test]
    fn test_decode_select_query_field() {
        let json = r#"{
            "component": "select",
            "key": "player",
            "label": "Player",
            "mode": "query",
            "query": "players-endpoint"
        }"#;
        let field: MetadataField = serde_json::from_str(json).unwrap();
        match field {
            MetadataField::Select {
                mode: SelectMode::Query { query },
                ..
            } => assert_eq!(query, "players-endpoint"),
            _ => panic!("expected query-mode select"),
        }
    }

    #[test]
    fn test_serialize_keeps_discriminants() {
        let field = MetadataField::Select {
            key: "side".into(),
            label: "Side".into(),
            required: false,
            mode: SelectMode::Query {
                query: "sides".into(),
            },
        };
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["component"], "select");
        assert_eq!(value["mode"], "query");
        assert_eq!(value["query"], "sides");
    }

    #[test]
    fn test_duplicate_key() {
        let config = vec![
            MetadataField::Input {
                key: "a".into(),
                label: "A".into(),
                required: false,
                input_type: InputType::Text,
                read_only: false,
            },
            MetadataField::Input {
                key: "a".into(),
                label: "A again".into(),
                required: false,
                input_type: InputType::Text,
                read_only: false,
            },
        ];
        assert_eq!(duplicate_key(&config), Some("a"));
        assert_eq!(duplicate_key(&config[..1]), None);
    }
}
