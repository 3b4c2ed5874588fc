//! Current page plus back-history
//!
//! Pure bookkeeping: route validation against the content tree and page
//! lifecycle (banner mount/unmount) happen in [`crate::state::AppState`].

use std::collections::VecDeque;

use mfront_core::Route;

/// Maximum number of routes remembered for `back()`
pub const MAX_HISTORY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
    history: VecDeque<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: VecDeque::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Move to `route`, remembering the current page.
    ///
    /// Returns `false` (and records nothing) if already there.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push_back(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
        true
    }

    /// Return to the previous page. Returns `false` when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
