use super::aggregate::TagCategoryId;

/// Delete-confirmation flow.
///
/// At most one deletion is ever pending; a new request while one is pending
/// replaces the target (last request wins). Confirming yields the pending id
/// so the caller can soft-delete it; both confirm and cancel return to idle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    Pending { id: TagCategoryId, name: String },
}

impl DeleteConfirmation {
    pub fn request(&mut self, id: TagCategoryId, name: impl Into<String>) {
        *self = DeleteConfirmation::Pending {
            id,
            name: name.into(),
        };
    }

    pub fn confirm(&mut self) -> Option<TagCategoryId> {
        match std::mem::take(self) {
            DeleteConfirmation::Pending { id, .. } => Some(id),
            DeleteConfirmation::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirmation::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DeleteConfirmation::Pending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_yields_the_pending_id_once() {
        let mut flow = DeleteConfirmation::default();
        assert!(!flow.is_pending());

        flow.request(TagCategoryId::new("a"), "Ball");
        assert!(flow.is_pending());

        assert_eq!(flow.confirm(), Some(TagCategoryId::new("a")));
        assert_eq!(flow, DeleteConfirmation::Idle);
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_cancel_discards_without_yielding() {
        let mut flow = DeleteConfirmation::default();
        flow.request(TagCategoryId::new("a"), "Ball");
        flow.cancel();
        assert_eq!(flow, DeleteConfirmation::Idle);
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_last_request_wins() {
        let mut flow = DeleteConfirmation::default();
        flow.request(TagCategoryId::new("a"), "Ball");
        flow.request(TagCategoryId::new("b"), "Goal");
        assert_eq!(flow.confirm(), Some(TagCategoryId::new("b")));
    }
}
