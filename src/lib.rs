//! Mastering Frontend Library
//!
//! Terminal rendition of the Mastering Modern Frontend landing page and docs
//! navigator.

pub use mfront_app as app;
pub use mfront_tui as tui;

// Re-export main entry points
pub use mfront_core::logging;
pub use mfront_tui::{run_with_site, RunOverrides};
