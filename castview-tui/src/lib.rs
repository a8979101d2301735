// Library interface for castview-tui (for integration tests)
pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod feed;

#[macro_use]
pub mod logging;

pub mod resolve;
pub mod terminal;
pub mod ui;
