//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Frame tick from the terminal poll loop (redraw only)
    Tick,

    /// Label timer fired for the banner mounted as `generation`
    BannerTick { generation: u64 },

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Go to a site path (`/`, `/docs`, `/docs/wasm`, `/demos`)
    Navigate { path: String },
    /// Return to the previous page
    Back,

    // ─────────────────────────────────────────────────────────
    // Banner Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the other banner button
    FocusNextButton,
    /// Activate the focused banner button
    ActivateButton,

    // ─────────────────────────────────────────────────────────
    // Docs Sidebar Messages
    // ─────────────────────────────────────────────────────────
    SelectPreviousDoc,
    SelectNextDoc,
    /// Open the highlighted sidebar entry
    OpenSelectedDoc,

    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    /// Rotate the theme preference light → dark → system
    CycleTheme,
}
