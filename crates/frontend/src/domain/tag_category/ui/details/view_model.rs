use crate::domain::tag_category::service::TagCategoryService;
use contracts::domain::tag_category::{
    FieldError, MetadataField, TagCategory, TagCategoryFormValues, TagCategoryId,
};
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone)]
pub enum FormMode {
    Create,
    Edit(TagCategoryId),
}

/// ViewModel for the tag category form
#[derive(Clone)]
pub struct TagCategoryDetailsViewModel {
    mode: FormMode,
    pub form: RwSignal<TagCategoryFormValues>,
    pub errors: RwSignal<Vec<FieldError>>,
}

impl TagCategoryDetailsViewModel {
    /// Fresh form for a new category; the dynamic sub-form starts from the
    /// supplied metadata schema
    pub fn for_create(metadata_config: Vec<MetadataField>) -> Self {
        Self {
            mode: FormMode::Create,
            form: RwSignal::new(TagCategoryFormValues::for_create(metadata_config)),
            errors: RwSignal::new(Vec::new()),
        }
    }

    /// Form prefilled from an existing record
    pub fn for_edit(item: &TagCategory) -> Self {
        Self {
            mode: FormMode::Edit(item.id.clone()),
            form: RwSignal::new(TagCategoryFormValues::from_category(item)),
            errors: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Reactive: current validation message for one field, if any
    pub fn error_for(&self, field: &'static str) -> Option<String> {
        self.errors
            .get()
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.clone())
    }

    /// Record a value captured by the dynamic sub-form. These travel with
    /// the submission but are never persisted on the entity.
    pub fn set_metadata_value(&self, key: &str, value: String) {
        let key = key.to_string();
        self.form.update(|form| {
            form.metadata.insert(key, value);
        });
    }

    pub fn metadata_value(&self, key: &str) -> String {
        self.form
            .with(|form| form.metadata.get(key).cloned())
            .unwrap_or_default()
    }

    /// Validate and commit. On failure the field errors are published and
    /// the store is never touched; on success the record is created or
    /// patched and `on_saved` runs.
    pub fn save_command(&self, service: TagCategoryService, on_saved: Rc<dyn Fn(())>) {
        let values = self.form.get();
        match values.validate() {
            Err(errors) => self.errors.set(errors),
            Ok(mut draft) => {
                self.errors.set(Vec::new());
                match &self.mode {
                    FormMode::Create => {
                        draft.name_structure = vec!["name".to_string()];
                        service.create(draft);
                    }
                    FormMode::Edit(id) => {
                        service.update(id, draft.into());
                    }
                }
                (on_saved)(());
            }
        }
    }
}
