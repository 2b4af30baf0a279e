//! Toolshelfctl library - exposes modules for testing

pub mod chart;
pub mod cli;
pub mod client;
pub mod commands;
pub mod display;
pub mod errors;
pub mod tui;
