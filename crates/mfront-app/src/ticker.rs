//! Banner label timer
//!
//! A background task that sends [`Message::BannerTick`] every `interval`,
//! starting one interval after it is spawned. The owning [`TickerHandle`]
//! shuts the task down through a `watch` channel and aborts it as a
//! fallback; dropping the handle does the same.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use mfront_core::prelude::*;

use crate::message::Message;

/// Owner of a running banner timer task
#[derive(Debug)]
pub struct TickerHandle {
    generation: u64,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_none()
    }

    /// Stop the task. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.shutdown_tx.send(true);
            task.abort();
            debug!("Stopped banner ticker (generation {})", self.generation);
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn a ticker for banner mount `generation`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_banner_ticker(
    generation: u64,
    interval: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> TickerHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + interval, interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    if msg_tx.send(Message::BannerTick { generation }).await.is_err() {
                        // Event loop gone
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }
        trace!("Banner ticker {} exited", generation);
    });

    debug!(
        "Started banner ticker (generation {}, every {:?})",
        generation, interval
    );

    TickerHandle {
        generation,
        shutdown_tx,
        task: Some(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(2000);

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_interval() {
        let (tx, mut rx) = mpsc::channel(8);
        let _ticker = spawn_banner_ticker(7, INTERVAL, tx);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(Message::BannerTick { generation: 7 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_repeat_every_interval() {
        let (tx, mut rx) = mpsc::channel(8);
        let _ticker = spawn_banner_ticker(1, INTERVAL, tx);

        for _ in 0..3 {
            let msg = rx.recv().await;
            assert_eq!(msg, Some(Message::BannerTick { generation: 1 }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_stop() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut ticker = spawn_banner_ticker(1, INTERVAL, tx);

        assert!(rx.recv().await.is_some());
        ticker.stop();
        assert!(ticker.is_stopped());

        tokio::time::sleep(INTERVAL * 5).await;
        // Sender dropped with the task; channel drains to None
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (tx, _rx) = mpsc::channel(8);
        let mut ticker = spawn_banner_ticker(1, INTERVAL, tx);

        ticker.stop();
        ticker.stop();
        assert!(ticker.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticker() {
        let (tx, mut rx) = mpsc::channel(8);
        drop(spawn_banner_ticker(1, INTERVAL, tx));

        tokio::time::sleep(INTERVAL * 3).await;
        assert_eq!(rx.recv().await, None);
    }
}
