//! TUI Module - interactive catalog browser
//!
//! - event_loop: terminal setup, key handling, action dispatch
//! - tasks: API calls run off the event loop, reporting back as actions
//! - render: drawing functions over the view state

mod event_loop;
mod render;
mod tasks;

// Re-export main entry point
pub use event_loop::run;
