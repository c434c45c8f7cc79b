use super::aggregate::{TagCategory, TagCategoryDraft, TagCategoryId, TagCategoryPatch};
use crate::enums::StatusFilter;

/// Store lifecycle: seeding happens through an explicit `initialize` call
/// instead of ambient module-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorePhase {
    #[default]
    Uninitialized,
    Ready,
}

/// Authoritative in-memory collection of tag categories.
///
/// The store is the sole owner of the canonical records; every read hands out
/// clones, so no consumer can alias into the collection. All operations are
/// synchronous, there is nothing to lock.
#[derive(Debug, Clone, Default)]
pub struct TagCategoryStore {
    items: Vec<TagCategory>,
    phase: StorePhase,
}

impl TagCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    /// Replace the collection wholesale with the seed. Called once at
    /// startup; seed decoding (and its failure handling) lives in the
    /// `seed` module.
    pub fn initialize(&mut self, seed: Vec<TagCategory>) {
        self.items = seed;
        self.phase = StorePhase::Ready;
    }

    /// Full collection in insertion order, most recently created first
    pub fn list(&self) -> Vec<TagCategory> {
        self.items.clone()
    }

    pub fn get(&self, id: &TagCategoryId) -> Option<TagCategory> {
        self.items.iter().find(|item| &item.id == id).cloned()
    }

    /// Subset passing the status constraint and, when the query is
    /// non-empty, a case-insensitive substring match on the name or the
    /// group label. Pure: equal inputs always give equal output.
    pub fn filter(&self, query: &str, status_filter: StatusFilter) -> Vec<TagCategory> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                if !status_filter.matches(item.status) {
                    return false;
                }
                if needle.is_empty() {
                    return true;
                }
                item.name.to_lowercase().contains(&needle)
                    || item.group.label.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Create a record from the draft, prepend it, return a snapshot of it
    pub fn create(&mut self, draft: TagCategoryDraft) -> TagCategory {
        let record = TagCategory::new_from_draft(draft);
        self.items.insert(0, record.clone());
        record
    }

    /// Shallow-merge the patch into the matching record. Returns whether the
    /// id matched; a miss changes nothing.
    pub fn update(&mut self, id: &TagCategoryId, patch: TagCategoryPatch) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Mark the matching record deleted, keeping it in the collection
    pub fn soft_delete(&mut self, id: &TagCategoryId) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.deleted = true;
                true
            }
            None => false,
        }
    }

    /// Remove the matching record entirely
    pub fn hard_delete(&mut self, id: &TagCategoryId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag_category::aggregate::KeyValue;
    use crate::enums::{PrecisionType, Status, StatusFilter};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn record(id: &str, name: &str, group_label: &str, status: Status) -> TagCategory {
        TagCategory {
            id: TagCategoryId::new(id),
            created_at: Utc::now(),
            deleted: false,
            name: name.into(),
            group: KeyValue::new(group_label, group_label),
            precision_type: PrecisionType::Long,
            status,
            metadata_config: Vec::new(),
            name_structure: vec!["name".into()],
            sub_categories: BTreeMap::new(),
            game_id: None,
            is_parent_tag: None,
            is_replay: None,
        }
    }

    fn draft(name: &str, group: &str, status: Status) -> TagCategoryDraft {
        TagCategoryDraft {
            name: name.into(),
            group: KeyValue::new(group, group),
            precision_type: PrecisionType::Short,
            status,
            metadata_config: Vec::new(),
            name_structure: vec!["name".into()],
            sub_categories: BTreeMap::new(),
        }
    }

    fn seeded() -> TagCategoryStore {
        let mut store = TagCategoryStore::new();
        store.initialize(vec![
            record("a", "Ball", "ball", Status::Active),
            record("b", "Foul", "discipline", Status::Inactive),
            record("c", "Corner", "set-piece", Status::Draft),
        ]);
        store
    }

    #[test]
    fn test_initialize_preserves_seed_order() {
        let store = seeded();
        assert_eq!(store.phase(), StorePhase::Ready);
        let names: Vec<_> = store.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Ball", "Foul", "Corner"]);
    }

    #[test]
    fn test_create_prepends_and_assigns_fresh_identity() {
        let mut store = seeded();
        let created = store.create(draft("Goal", "goal", Status::Draft));
        assert!(!created.deleted);

        let listed = store.list();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0], created);
        assert_eq!(listed[1].name, "Ball");

        let ids: std::collections::HashSet<_> =
            listed.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_filter_without_constraints_equals_list() {
        let store = seeded();
        assert_eq!(store.filter("", StatusFilter::All), store.list());
        // pure: repeating the call changes nothing
        assert_eq!(store.filter("", StatusFilter::All), store.list());
    }

    #[test]
    fn test_filter_by_status_is_exact_and_idempotent() {
        let store = seeded();
        let active = store.filter("", StatusFilter::Only(Status::Active));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Ball");
        assert_eq!(active, store.filter("", StatusFilter::Only(Status::Active)));
    }

    #[test]
    fn test_filter_query_matches_name_or_group_case_insensitive() {
        let store = seeded();
        assert!(store.filter("goalkeeper", StatusFilter::All).is_empty());

        let by_name = store.filter("bAll", StatusFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Ball");

        let by_group = store.filter("SET-", StatusFilter::All);
        assert_eq!(by_group.len(), 1);
        assert_eq!(by_group[0].name, "Corner");
    }

    #[test]
    fn test_filter_combines_status_and_query() {
        let store = seeded();
        assert_eq!(store.filter("ball", StatusFilter::All).len(), 1);
        assert!(store
            .filter("ball", StatusFilter::Only(Status::Draft))
            .is_empty());
    }

    #[test]
    fn test_update_merges_and_reports_found() {
        let mut store = seeded();
        let id = TagCategoryId::new("a");
        let found = store.update(
            &id,
            TagCategoryPatch {
                name: Some("Ball v2".into()),
                ..TagCategoryPatch::default()
            },
        );
        assert!(found);

        let updated = store.get(&id).unwrap();
        assert_eq!(updated.name, "Ball v2");
        assert_eq!(updated.status, Status::Active);

        // merging an empty patch afterwards is a no-op
        store.update(&id, TagCategoryPatch::default());
        assert_eq!(store.get(&id).unwrap(), updated);
    }

    #[test]
    fn test_operations_on_unknown_id_are_noops() {
        let mut store = seeded();
        let missing = TagCategoryId::new("nope");
        assert!(!store.update(&missing, TagCategoryPatch::default()));
        assert!(!store.soft_delete(&missing));
        assert!(!store.hard_delete(&missing));
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_soft_delete_keeps_record_hard_delete_removes_it() {
        let mut store = seeded();
        let id = TagCategoryId::new("b");

        assert!(store.soft_delete(&id));
        let listed = store.list();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().any(|c| c.id == id && c.deleted));

        assert!(store.hard_delete(&id));
        assert!(store.get(&id).is_none());
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_reads_are_snapshots() {
        let store = seeded();
        let mut snapshot = store.list();
        snapshot[0].name = "mutated".into();
        assert_eq!(store.list()[0].name, "Ball");
    }
}
