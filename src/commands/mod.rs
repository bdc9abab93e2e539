//! CLI commands

pub mod add;
pub mod list;
