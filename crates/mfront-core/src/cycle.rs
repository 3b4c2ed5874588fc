//! Auto-cycling label state
//!
//! [`CyclicLabelState`] owns an index into a fixed, non-empty [`LabelSet`]
//! and advances it one position per tick, wrapping to the start. It knows
//! nothing about clocks: whoever owns the timer (a tokio interval in the app,
//! or a test calling [`CyclicLabelState::tick`] directly) drives it.
//!
//! State machine:
//!
//! ```text
//!            start()              tick() (self-loop)
//!  Stopped ─────────▶ Running ◀──────────┐
//!     ▲                  │ ──────────────┘
//!     └──── stop() ──────┘
//! ```
//!
//! `tick()` while stopped and `stop()` while stopped are no-ops.

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// Ordered, non-empty list of display labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Build a label set, rejecting an empty sequence
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::EmptyLabelSet);
        }
        Ok(Self(labels))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for LabelSet {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

/// Lifecycle of a cycling label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleStatus {
    #[default]
    Stopped,
    Running,
}

/// Handle returned by [`CyclicLabelState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(usize, &str) + Send>;

/// Rotating "current label" over a fixed label set
pub struct CyclicLabelState {
    labels: LabelSet,
    interval: Duration,
    index: usize,
    status: CycleStatus,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CyclicLabelState {
    /// Create a stopped state positioned on the first label.
    ///
    /// `interval` is the period its driver should tick at and must be non-zero.
    pub fn new(labels: LabelSet, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::ZeroInterval);
        }
        Ok(Self {
            labels,
            interval,
            index: 0,
            status: CycleStatus::Stopped,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Convenience constructor from raw labels and a millisecond interval
    pub fn from_labels<I, S>(labels: I, interval_ms: u64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(LabelSet::new(labels)?, Duration::from_millis(interval_ms))
    }

    /// Stopped → Running. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.status == CycleStatus::Running {
            return false;
        }
        self.status = CycleStatus::Running;
        tracing::debug!(
            "Label cycle started ({} labels, every {:?})",
            self.labels.len(),
            self.interval
        );
        true
    }

    /// Advance one position with wraparound.
    ///
    /// Returns `false` and leaves the index untouched when stopped.
    pub fn tick(&mut self) -> bool {
        if self.status != CycleStatus::Running {
            tracing::trace!("Ignoring tick on stopped label cycle");
            return false;
        }
        self.index = (self.index + 1) % self.labels.len();
        self.notify();
        true
    }

    /// Running → Stopped. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.status == CycleStatus::Stopped {
            return false;
        }
        self.status = CycleStatus::Stopped;
        tracing::debug!("Label cycle stopped at index {}", self.index);
        true
    }

    pub fn status(&self) -> CycleStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == CycleStatus::Running
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_label(&self) -> &str {
        // index < len is maintained by `tick`
        &self.labels.as_slice()[self.index]
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Register a callback invoked with `(index, label)` after every effective tick
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(usize, &str) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let index = self.index;
        let label = &self.labels.as_slice()[index];
        for (_, listener) in self.listeners.iter_mut() {
            listener(index, label);
        }
    }
}

impl fmt::Debug for CyclicLabelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicLabelState")
            .field("labels", &self.labels)
            .field("interval", &self.interval)
            .field("index", &self.index)
            .field("status", &self.status)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
