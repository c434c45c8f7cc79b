use contracts::domain::tag_category::{
    seed, DeleteConfirmation, MetadataField, TagCategory, TagCategoryDraft, TagCategoryId,
    TagCategoryPatch, TagCategoryStore,
};
use contracts::enums::StatusFilter;
use leptos::prelude::*;

/// Embedded seed collection, loaded once when the service is constructed
static SAMPLE_DATA: &str = include_str!("../../data/sample_data.json");

/// Context service owning the tag category collection.
///
/// Wraps the store in a signal so every view re-renders when a mutation goes
/// through, and carries the list page's query/status filter state. All reads
/// hand out snapshots cloned out of the store.
#[derive(Clone, Copy)]
pub struct TagCategoryService {
    store: RwSignal<TagCategoryStore>,
    pub query: RwSignal<String>,
    pub status_filter: RwSignal<StatusFilter>,
    pub confirm: RwSignal<DeleteConfirmation>,
}

impl TagCategoryService {
    pub fn new() -> Self {
        let mut store = TagCategoryStore::new();
        match seed::parse_str(SAMPLE_DATA) {
            Ok(records) => store.initialize(records),
            Err(e) => {
                log::error!("Invalid sample data format: {e:#}");
                store.initialize(Vec::new());
            }
        }

        Self {
            store: RwSignal::new(store),
            query: RwSignal::new(String::new()),
            status_filter: RwSignal::new(StatusFilter::All),
            confirm: RwSignal::new(DeleteConfirmation::Idle),
        }
    }

    /// Full collection, newest first
    pub fn items(&self) -> Vec<TagCategory> {
        self.store.with(|store| store.list())
    }

    /// Collection view under the current query and status filter
    pub fn filtered(&self) -> Vec<TagCategory> {
        let query = self.query.get();
        let status_filter = self.status_filter.get();
        self.store.with(|store| store.filter(&query, status_filter))
    }

    /// Metadata schema the create form starts from: the first record's
    /// config, or empty when the collection is empty
    pub fn default_metadata_config(&self) -> Vec<MetadataField> {
        self.store.with(|store| {
            store
                .list()
                .first()
                .map(|record| record.metadata_config.clone())
                .unwrap_or_default()
        })
    }

    pub fn create(&self, draft: TagCategoryDraft) -> TagCategory {
        self.store
            .try_update(|store| store.create(draft))
            .expect("store signal disposed")
    }

    pub fn update(&self, id: &TagCategoryId, patch: TagCategoryPatch) {
        let id = id.clone();
        self.store.update(|store| {
            store.update(&id, patch);
        });
    }

    /// Flag a record as deleted without removing it from the collection
    pub fn soft_delete(&self, id: &TagCategoryId) {
        let id = id.clone();
        self.store.update(|store| {
            store.soft_delete(&id);
        });
    }

    /// Permanently remove a record from the collection
    pub fn hard_delete(&self, id: &TagCategoryId) {
        let id = id.clone();
        self.store.update(|store| {
            store.hard_delete(&id);
        });
    }

    /// Start the delete-confirmation flow for a record; a later request
    /// replaces any pending one
    pub fn request_delete(&self, record: &TagCategory) {
        let id = record.id.clone();
        let name = record.name.clone();
        self.confirm.update(|flow| flow.request(id, name));
    }

    /// Confirm the pending deletion: soft-delete the target and return to
    /// the idle state
    pub fn confirm_delete(&self) {
        let pending = self.confirm.try_update(|flow| flow.confirm()).flatten();
        if let Some(id) = pending {
            self.soft_delete(&id);
        }
    }

    pub fn cancel_delete(&self) {
        self.confirm.update(|flow| flow.cancel());
    }
}

/// Shorthand for pulling the service out of context
pub fn use_tag_categories() -> TagCategoryService {
    use_context::<TagCategoryService>().expect("TagCategoryService not provided in context")
}
