pub mod card;
pub mod confirm;
pub mod details;
pub mod list;
