//! Shared types and client-side logic for Toolshelf components.
//!
//! The daemon and the client both speak in terms of [`tool::Tool`] and the
//! request/response bodies in [`api`]. Filtering, aggregation and the
//! client view state are pure and live here so they can be tested without
//! a network or a terminal.

pub mod api;
pub mod filter;
pub mod tool;
pub mod view;

pub use tool::{Tool, ToolId};

/// Version reported by every component
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default daemon port
pub const DEFAULT_PORT: u16 = 3001;

/// Default API base URL used by the client
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
