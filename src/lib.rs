pub mod app;
pub mod config;
pub mod edit_mode;
pub mod keymap;
pub mod storage;
pub mod task;
pub mod task_store;
pub mod terminal;
pub mod ui;
