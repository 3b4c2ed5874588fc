//! Message processing - handles TEA message loop and timer actions

use tokio::sync::mpsc;

use mfront_core::prelude::*;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;
use crate::ticker::{spawn_banner_ticker, TickerHandle};

/// Background timers owned by the event loop
#[derive(Debug, Default)]
pub struct Timers {
    banner: Option<TickerHandle>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the running banner ticker, if any
    pub fn banner_generation(&self) -> Option<u64> {
        self.banner.as_ref().map(TickerHandle::generation)
    }

    pub fn stop_all(&mut self) {
        if let Some(mut ticker) = self.banner.take() {
            ticker.stop();
        }
    }
}

/// Process a message through the TEA update function
///
/// This handles the core message processing loop, including:
/// - Running update() on the message
/// - Executing timer actions
/// - Processing follow-up messages
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut Timers,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, timers);
        }

        msg = result.message;
    }
}

/// Execute an action returned by update()
///
/// Must be called from within a tokio runtime.
pub fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, timers: &mut Timers) {
    match action {
        UpdateAction::StartBannerTimer {
            generation,
            interval,
        } => {
            if let Some(mut previous) = timers.banner.take() {
                previous.stop();
            }
            timers.banner = Some(spawn_banner_ticker(generation, interval, msg_tx.clone()));
        }
        UpdateAction::StopBannerTimer => {
            if let Some(mut ticker) = timers.banner.take() {
                ticker.stop();
            } else {
                trace!("StopBannerTimer with no ticker running");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfront_core::NavigationAction;
    use std::time::Duration;

    fn test_state() -> (tempfile::TempDir, AppState) {
        let temp = tempfile::tempdir().unwrap();
        let state = AppState::with_defaults(temp.path().to_path_buf(), None).unwrap();
        (temp, state)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_advance_banner_through_loop() {
        let (_temp, mut state) = test_state();
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = Timers::new();

        if let Some(action) = handler::banner_timer_action(&state) {
            handle_action(action, &tx, &mut timers);
        }
        assert_eq!(timers.banner_generation(), Some(1));

        for label in ["WebAssembly", "Micro Frontends"] {
            let msg = rx.recv().await.unwrap();
            process_message(&mut state, msg, &tx, &mut timers);
            assert_eq!(state.banner().unwrap().current_label(), label);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_home_stops_ticker() {
        let (_temp, mut state) = test_state();
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = Timers::new();
        if let Some(action) = handler::banner_timer_action(&state) {
            handle_action(action, &tx, &mut timers);
        }

        process_message(
            &mut state,
            Message::Navigate {
                path: "/docs".to_string(),
            },
            &tx,
            &mut timers,
        );
        assert_eq!(timers.banner_generation(), None);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_replaces_ticker() {
        let (_temp, mut state) = test_state();
        let (tx, _rx) = mpsc::channel(8);
        let mut timers = Timers::new();

        process_message(
            &mut state,
            Message::Navigate {
                path: "/demos".into(),
            },
            &tx,
            &mut timers,
        );
        process_message(&mut state, Message::Back, &tx, &mut timers);

        assert_eq!(timers.banner_generation(), Some(2));
        state.navigate_to("/docs");
        timers.stop_all();
        assert_eq!(timers.banner_generation(), None);
    }
}
