use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::metadata::MetadataField;
use crate::domain::common::AggregateId;
use crate::enums::{PrecisionType, Status};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a tag category.
///
/// String-backed so seed files are free to carry legacy ids; freshly created
/// records always get a v4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCategoryId(String);

impl TagCategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for TagCategoryId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Empty tag category id".into());
        }
        Ok(Self(s.to_string()))
    }
}

impl std::fmt::Display for TagCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Value objects
// ============================================================================

/// Label/value pair classifying a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyValue {
    pub label: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Named sub-category carrying its own field-descriptor config.
///
/// The config is the same descriptor shape the parent uses, so the structure
/// nests without special cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub label: String,
    pub config: Vec<MetadataField>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Tag category: a named tagging schema with status, precision, grouping and
/// a user-configurable set of metadata fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCategory {
    pub id: TagCategoryId,

    /// Creation timestamp; epoch milliseconds on the wire
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// Soft-delete flag; soft-deleted records stay in the collection
    #[serde(default)]
    pub deleted: bool,

    pub name: String,
    pub group: KeyValue,
    pub precision_type: PrecisionType,
    pub status: Status,

    /// Ordered schema of the category's dynamic sub-form
    #[serde(default)]
    pub metadata_config: Vec<MetadataField>,

    /// Field-name tokens composing a display name
    #[serde(default)]
    pub name_structure: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sub_categories: BTreeMap<String, SubCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_parent_tag: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_replay: Option<bool>,
}

impl TagCategory {
    /// Construct a new record from a draft; assigns the id, the creation
    /// timestamp and the initial (not deleted) state
    pub fn new_from_draft(draft: TagCategoryDraft) -> Self {
        Self {
            id: TagCategoryId::new_v4(),
            created_at: Utc::now(),
            deleted: false,
            name: draft.name,
            group: draft.group,
            precision_type: draft.precision_type,
            status: draft.status,
            metadata_config: draft.metadata_config,
            name_structure: draft.name_structure,
            sub_categories: draft.sub_categories,
            game_id: None,
            is_parent_tag: None,
            is_replay: None,
        }
    }

    /// Shallow-merge a patch. Fields absent from the patch stay untouched;
    /// `id` and `created_at` are not representable in the patch at all.
    pub fn apply_patch(&mut self, patch: TagCategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(group) = patch.group {
            self.group = group;
        }
        if let Some(precision_type) = patch.precision_type {
            self.precision_type = precision_type;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(metadata_config) = patch.metadata_config {
            self.metadata_config = metadata_config;
        }
        if let Some(name_structure) = patch.name_structure {
            self.name_structure = name_structure;
        }
        if let Some(sub_categories) = patch.sub_categories {
            self.sub_categories = sub_categories;
        }
        if let Some(deleted) = patch.deleted {
            self.deleted = deleted;
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Everything a caller supplies to create a category; the store assigns the
/// rest (id, timestamp, deleted flag)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCategoryDraft {
    pub name: String,
    pub group: KeyValue,
    pub precision_type: PrecisionType,
    pub status: Status,
    #[serde(default)]
    pub metadata_config: Vec<MetadataField>,
    #[serde(default)]
    pub name_structure: Vec<String>,
    #[serde(default)]
    pub sub_categories: BTreeMap<String, SubCategory>,
}

/// Patch for `update`: only `Some` fields are merged
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagCategoryPatch {
    pub name: Option<String>,
    pub group: Option<KeyValue>,
    pub precision_type: Option<PrecisionType>,
    pub status: Option<Status>,
    pub metadata_config: Option<Vec<MetadataField>>,
    pub name_structure: Option<Vec<String>>,
    pub sub_categories: Option<BTreeMap<String, SubCategory>>,
    pub deleted: Option<bool>,
}

/// The form submits exactly the fields it edits; the schema, the name
/// structure and the sub-categories of an existing record stay as they are.
impl From<TagCategoryDraft> for TagCategoryPatch {
    fn from(draft: TagCategoryDraft) -> Self {
        Self {
            name: Some(draft.name),
            group: Some(draft.group),
            precision_type: Some(draft.precision_type),
            status: Some(draft.status),
            ..Self::default()
        }
    }
}
