//! mfront-app - Application state and orchestration for Mastering Frontend
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: site configuration, routing, the landing page banner and its
//! label timer, and the docs sidebar.

pub mod banner;
pub mod config;
pub mod docs;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod router;
pub mod signals;
pub mod state;
pub mod ticker;

// Re-export primary types
pub use banner::{BannerButton, BannerState, HeroImage};
pub use docs::{DocPage, TocEntry};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::Timers;
pub use state::{AppPhase, AppState};
