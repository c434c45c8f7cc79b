pub mod common;
pub mod tag_category;
