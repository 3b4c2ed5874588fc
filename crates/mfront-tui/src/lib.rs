//! mfront-tui - Terminal UI for Mastering Frontend
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the page widgets and the main event loop driving the TEA state from
//! mfront-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run_with_site, RunOverrides};
