//! Main update function - handles state transitions (TEA pattern)

use mfront_core::prelude::*;
use mfront_core::NavigationAction;

use crate::banner::BannerState;
use crate::message::Message;
use crate::state::AppState;

use super::{banner_timer_action, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => with_banner_lifecycle(state, AppState::quit),

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::BannerTick { generation } => {
            state.on_banner_tick(generation);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => {
            with_banner_lifecycle(state, |state| state.navigate_to(&path))
        }
        Message::Back => with_banner_lifecycle(state, |state| {
            state.go_back();
        }),

        // ─────────────────────────────────────────────────────────
        // Banner Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNextButton => {
            if let Some(banner) = state.banner_mut() {
                banner.focus_next();
            }
            UpdateResult::none()
        }
        Message::ActivateButton => match state.banner().map(BannerState::focus) {
            Some(button) => with_banner_lifecycle(state, |state| button.activate(state)),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Docs Sidebar Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPreviousDoc => {
            state.select_previous_doc();
            UpdateResult::none()
        }
        Message::SelectNextDoc => {
            state.select_next_doc();
            UpdateResult::none()
        }
        Message::OpenSelectedDoc => match state.selected_doc_path() {
            Some(path) => UpdateResult::message(Message::Navigate { path }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Theme Messages
        // ─────────────────────────────────────────────────────────
        Message::CycleTheme => {
            let resolved = state.theme.cycle_preference();
            info!(
                "Theme preference now {} (resolved {})",
                state.theme.preference(),
                resolved
            );
            UpdateResult::none()
        }
    }
}

/// Run `f` and report any banner mount/unmount it caused as a timer action
fn with_banner_lifecycle(state: &mut AppState, f: impl FnOnce(&mut AppState)) -> UpdateResult {
    let before = state.banner_generation();
    f(state);
    let after = state.banner_generation();

    if before == after {
        return UpdateResult::none();
    }
    match banner_timer_action(state) {
        Some(action) => UpdateResult::action(action),
        None => UpdateResult::action(UpdateAction::StopBannerTimer),
    }
}
