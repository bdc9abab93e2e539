//! hotkey-vault library
//!
//! Personal catalogue of keyboard shortcuts grouped into categories, stored in
//! a local SQLite database and browsed through a terminal interface.

pub mod app;
pub mod commands;
pub mod config;
pub mod runtime;
pub mod state;
pub mod store;
pub mod ui;
pub mod view_model;
