pub mod aggregate;
pub mod confirm;
pub mod form;
pub mod metadata;
pub mod seed;
pub mod store;

pub use aggregate::{
    KeyValue, SubCategory, TagCategory, TagCategoryDraft, TagCategoryId, TagCategoryPatch,
};
pub use confirm::DeleteConfirmation;
pub use form::{FieldError, TagCategoryFormValues};
pub use metadata::{InputType, MetadataField, SelectMode, SelectOption};
pub use store::{StorePhase, TagCategoryStore};
