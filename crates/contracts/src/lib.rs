//! Domain contracts for the tag category manager: the entity model, the
//! in-memory collection store, submission-time validation and the
//! delete-confirmation flow. UI-free by design; the frontend crate consumes
//! everything here through read-only snapshots.

pub mod domain;
pub mod enums;
