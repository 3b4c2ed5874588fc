//! Key event handlers for each page

use mfront_core::navigation::{DOCS_PATH, HOME_PATH};
use mfront_core::Route;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }
    match state.route() {
        Route::Home => handle_key_home(key),
        Route::Docs { .. } => handle_key_docs(key),
        Route::Demos => None,
    }
}

/// Keys available on every page
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('t') => Some(Message::CycleTheme),
        InputKey::Char('h') => Some(Message::Navigate {
            path: HOME_PATH.to_string(),
        }),
        InputKey::Char('d') => Some(Message::Navigate {
            path: DOCS_PATH.to_string(),
        }),
        InputKey::Esc | InputKey::Backspace => Some(Message::Back),
        _ => None,
    }
}

/// Landing page: button focus and activation
fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::BackTab | InputKey::Left | InputKey::Right => {
            Some(Message::FocusNextButton)
        }
        InputKey::Enter => Some(Message::ActivateButton),
        _ => None,
    }
}

/// Docs page: sidebar movement
fn handle_key_docs(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousDoc),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextDoc),
        InputKey::Enter => Some(Message::OpenSelectedDoc),
        _ => None,
    }
}
