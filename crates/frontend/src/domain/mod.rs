pub mod tag_category;
