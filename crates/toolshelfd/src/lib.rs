//! Toolshelf daemon library - exposes modules for testing.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod routes;
pub mod server;
