//! Main TUI runner - entry point and event loop
//!
//! - `run_with_site`: load settings and content, build the state, run the UI
//! - `run_loop`: drain background messages, render, poll the terminal

use std::path::Path;

use tokio::sync::mpsc;

use mfront_app::config::{self, Settings};
use mfront_app::process::{self, Timers};
use mfront_app::{handler, signals, AppState, Message};
use mfront_core::prelude::*;
use mfront_core::{ContentMetadataTree, EnvThemeResolver, ThemePreference, ThemeResolver};

use super::{event, render, terminal};

/// Command-line overrides applied on top of `.mfront/config.toml`
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub theme: Option<ThemePreference>,
    pub route: Option<String>,
}

impl RunOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme.preference = theme;
        }
        if let Some(route) = &self.route {
            settings.navigation.start_path = route.clone();
        }
    }
}

/// Build the initial state for a site directory
///
/// A broken content override falls back to the built-in tree; invalid
/// settings are fatal.
pub fn build_state(
    site_dir: &Path,
    overrides: &RunOverrides,
    resolver: &dyn ThemeResolver,
) -> Result<AppState> {
    let mut settings = config::load_settings(site_dir);
    overrides.apply(&mut settings);
    info!(
        "Loaded settings: theme={}, interval={}ms, labels={}",
        settings.theme.preference,
        settings.banner.interval_ms,
        settings.banner.labels.len()
    );

    let content = match ContentMetadataTree::load(site_dir) {
        Ok(content) => content,
        Err(e) if e.is_recoverable() => {
            warn!("Using built-in content tree: {}", e);
            ContentMetadataTree::builtin()
        }
        Err(e) => return Err(e),
    };

    AppState::new(
        site_dir.to_path_buf(),
        settings,
        content,
        resolver.system_theme(),
    )
}

/// Run the TUI for a site directory
pub async fn run_with_site(site_dir: &Path, overrides: RunOverrides) -> Result<()> {
    // Fail before touching the terminal
    let mut state = build_state(site_dir, &overrides, &EnvThemeResolver)?;

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let mut timers = Timers::new();
    if let Some(action) = handler::banner_timer_action(&state) {
        process::handle_action(action, &msg_tx, &mut timers);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &mut timers);

    timers.stop_all();
    signal_task.abort();
    ratatui::restore();
    info!("Mastering Frontend exited");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut Timers,
) -> Result<()> {
    while !state.should_quit() {
        // Timer ticks, signals
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, msg_tx, timers);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, msg_tx, timers);
        }
    }

    Ok(())
}
