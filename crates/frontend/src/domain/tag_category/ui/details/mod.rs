//! Tag Category form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::TagCategoryDetails;
pub use view_model::TagCategoryDetailsViewModel;
