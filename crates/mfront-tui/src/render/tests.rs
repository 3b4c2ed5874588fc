//! Full-screen rendering tests
//!
//! Each test renders `view` into a `TestBackend` for one page.

use super::view;
use crate::test_utils::{test_app_state, TestTerminal};
use mfront_app::{AppState, Message};
use mfront_core::{NavigationAction, ResolvedTheme};
use tempfile::TempDir;

fn render_screen(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

fn home_state() -> (TempDir, AppState) {
    let temp = tempfile::tempdir().unwrap();
    let state = test_app_state(temp.path(), None);
    (temp, state)
}

// ===========================================================================
// Home
// ===========================================================================

#[test]
fn test_home_renders_banner() {
    let (_temp, mut state) = home_state();
    let mut term = TestTerminal::new();
    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains("Mastering Modern Frontend"));
    assert!(term.buffer_contains("Currently Exploring: PWAs"));
    assert!(term.buffer_contains("[ Start Learning ]"));
    assert!(term.buffer_contains("Developer working"));
}

#[test]
fn test_home_label_follows_ticks() {
    let (_temp, mut state) = home_state();
    mfront_app::handler::update(&mut state, Message::BannerTick { generation: 1 });
    mfront_app::handler::update(&mut state, Message::BannerTick { generation: 1 });

    let mut term = TestTerminal::new();
    render_screen(&mut term, &mut state);
    assert!(term.buffer_contains("Currently Exploring: Micro Frontends"));
}

#[test]
fn test_logo_switches_with_theme() {
    let (_temp, mut state) = home_state();
    let mut term = TestTerminal::new();

    render_screen(&mut term, &mut state);
    assert!(term.line_contains(1, "dept-logo-white.svg"));

    state.theme.set_system(Some(ResolvedTheme::Light));
    render_screen(&mut term, &mut state);
    assert!(term.line_contains(1, "dept-logo.svg"));
    assert!(!term.buffer_contains("dept-logo-white.svg"));
}

#[test]
fn test_blocked_hero_image_renders_placeholder() {
    let temp = tempfile::tempdir().unwrap();
    let mut settings = mfront_app::config::Settings::default();
    settings.banner.image = "https://cdn.example.com/hero.png".to_string();
    let mut state = AppState::new(
        temp.path().to_path_buf(),
        settings,
        mfront_core::ContentMetadataTree::builtin(),
        None,
    )
    .unwrap();

    let mut term = TestTerminal::new();
    render_screen(&mut term, &mut state);
    assert!(term.buffer_contains("Image unavailable"));
}

// ===========================================================================
// Docs
// ===========================================================================

#[test]
fn test_docs_page_shows_sidebar_and_breadcrumb() {
    let (_temp, mut state) = home_state();
    state.navigate_to("/docs/wasm");

    let mut term = TestTerminal::new();
    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains(" Documentation "));
    assert!(term.buffer_contains("▸ Web Assembly"));
    assert!(term.buffer_contains("Documentation › Web Assembly"));
    assert!(term.buffer_contains("This page has no content yet."));
    assert!(term.buffer_contains("/docs/wasm"));
    assert!(!term.buffer_contains("Currently Exploring"));
}

#[test]
fn test_docs_page_with_markdown_and_toc() {
    let (temp, mut state) = home_state();
    let docs_dir = temp.path().join("content").join("docs");
    std::fs::create_dir_all(&docs_dir).unwrap();
    std::fs::write(
        docs_dir.join("pwa.md"),
        "# Progressive Web Apps\nOffline first.\n## Service Workers\n",
    )
    .unwrap();
    state.navigate_to("/docs/pwa");

    let mut term = TestTerminal::wide();
    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains("Offline first."));
    assert!(term.buffer_contains("On this page"));
    assert!(term.buffer_contains("Service Workers"));
}

// ===========================================================================
// Demos
// ===========================================================================

#[test]
fn test_demos_page() {
    let (_temp, mut state) = home_state();
    state.navigate_to("/demos");

    let mut term = TestTerminal::new();
    render_screen(&mut term, &mut state);

    assert!(term.buffer_contains("Interactive playgrounds"));
    assert!(term.buffer_contains("h home"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let (_temp, mut state) = home_state();
    let mut term = TestTerminal::with_size(10, 4);
    render_screen(&mut term, &mut state);

    state.navigate_to("/docs");
    render_screen(&mut term, &mut state);
}
