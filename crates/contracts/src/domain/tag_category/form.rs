use std::collections::BTreeMap;

use super::aggregate::{KeyValue, TagCategory, TagCategoryDraft};
use super::metadata::{self, MetadataField};
use crate::enums::{PrecisionType, Status};

/// One field-scoped validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw form state, string-typed the way DOM inputs hand it over.
///
/// `metadata` holds the values the dynamic sub-form captured. They travel
/// with the submission but are never persisted on the entity; the entity
/// stores only the schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagCategoryFormValues {
    pub name: String,
    pub status: String,
    pub precision_type: String,
    pub group_label: String,
    pub group_value: String,
    pub metadata_config: Vec<MetadataField>,
    pub metadata: BTreeMap<String, String>,
}

impl TagCategoryFormValues {
    /// Defaults for the create form: ACTIVE / LONG, empty config supplied by
    /// the caller
    pub fn for_create(metadata_config: Vec<MetadataField>) -> Self {
        Self {
            status: Status::Active.code().into(),
            precision_type: PrecisionType::Long.code().into(),
            metadata_config,
            ..Self::default()
        }
    }

    /// Prefill from an existing record for the edit form
    pub fn from_category(category: &TagCategory) -> Self {
        Self {
            name: category.name.clone(),
            status: category.status.code().into(),
            precision_type: category.precision_type.code().into(),
            group_label: category.group.label.clone(),
            group_value: category.group.value.clone(),
            metadata_config: category.metadata_config.clone(),
            metadata: BTreeMap::new(),
        }
    }

    /// Submission-time checks. Either every rule passes and the values
    /// become a draft the store can take, or the full list of field-scoped
    /// failures comes back and no store operation may run.
    pub fn validate(&self) -> Result<TagCategoryDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }
        let status = Status::from_code(&self.status);
        if status.is_none() {
            errors.push(FieldError::new("status", "Unknown status"));
        }
        let precision_type = PrecisionType::from_code(&self.precision_type);
        if precision_type.is_none() {
            errors.push(FieldError::new("precisionType", "Unknown precision type"));
        }
        if self.group_label.trim().is_empty() {
            errors.push(FieldError::new("groupLabel", "Group label is required"));
        }
        if self.group_value.trim().is_empty() {
            errors.push(FieldError::new("groupValue", "Group value is required"));
        }
        if let Some(key) = metadata::duplicate_key(&self.metadata_config) {
            errors.push(FieldError::new(
                "metadataConfig",
                format!("Duplicate metadata key: {key}"),
            ));
        }

        match (status, precision_type) {
            (Some(status), Some(precision_type)) if errors.is_empty() => Ok(TagCategoryDraft {
                name: self.name.clone(),
                group: KeyValue::new(self.group_label.clone(), self.group_value.clone()),
                precision_type,
                status,
                metadata_config: self.metadata_config.clone(),
                name_structure: Vec::new(),
                sub_categories: BTreeMap::new(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag_category::metadata::InputType;

    fn valid_values() -> TagCategoryFormValues {
        TagCategoryFormValues {
            name: "Goal".into(),
            status: "DRAFT".into(),
            precision_type: "SHORT".into(),
            group_label: "goal".into(),
            group_value: "goal".into(),
            metadata_config: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn test_valid_values_become_a_draft() {
        let draft = valid_values().validate().unwrap();
        assert_eq!(draft.name, "Goal");
        assert_eq!(draft.status, Status::Draft);
        assert_eq!(draft.precision_type, PrecisionType::Short);
        assert_eq!(draft.group.label, "goal");
    }

    #[test]
    fn test_empty_name_is_reported_against_the_name_field() {
        let mut values = valid_values();
        values.name = "   ".into();
        let errors = values.validate().unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.field == "name" && e.message == "Name is required"));
    }

    #[test]
    fn test_all_failures_are_collected() {
        let values = TagCategoryFormValues::default();
        let errors = values.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["name", "status", "precisionType", "groupLabel", "groupValue"]
        );
    }

    #[test]
    fn test_unknown_enum_codes_are_rejected() {
        let mut values = valid_values();
        values.status = "PAUSED".into();
        values.precision_type = "short".into();
        let errors = values.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "status"));
        assert!(errors.iter().any(|e| e.field == "precisionType"));
    }

    #[test]
    fn test_duplicate_metadata_keys_are_rejected() {
        let field = MetadataField::Input {
            key: "period".into(),
            label: "Period".into(),
            required: false,
            input_type: InputType::Text,
            read_only: false,
        };
        let mut values = valid_values();
        values.metadata_config = vec![field.clone(), field];
        let errors = values.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "metadataConfig");
    }

    #[test]
    fn test_create_defaults() {
        let values = TagCategoryFormValues::for_create(Vec::new());
        assert_eq!(values.status, "ACTIVE");
        assert_eq!(values.precision_type, "LONG");
        assert!(values.name.is_empty());
    }
}
