//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page

pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start the label timer for a freshly mounted banner.
    ///
    /// Replaces any running banner timer.
    StartBannerTimer { generation: u64, interval: Duration },

    /// Stop the banner timer (banner unmounted)
    StopBannerTimer,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Timer action matching the currently mounted banner, if any.
///
/// Used by the runner at startup, before any message has been processed.
pub fn banner_timer_action(state: &AppState) -> Option<UpdateAction> {
    state
        .banner()
        .map(|banner| UpdateAction::StartBannerTimer {
            generation: banner.generation(),
            interval: banner.interval(),
        })
}
