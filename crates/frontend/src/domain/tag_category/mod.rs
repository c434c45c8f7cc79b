pub mod service;
pub mod ui;
