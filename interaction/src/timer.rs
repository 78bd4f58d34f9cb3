//! Single-slot timer bookkeeping.
//!
//! The core never owns a real timer. It hands out [`TimerToken`]s, the host
//! arms a browser timeout or animation frame under that token, and the core
//! only honours the callback if the token is still the live one. Arming a
//! slot always supersedes whatever it held, so two timers of one kind can
//! never both mutate state.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Opaque identity of one scheduled timer or frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Raw numeric value, for logging.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Holds at most one live token.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    next: u64,
    live: Option<TimerToken>,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token, returning it together with the token it replaced.
    ///
    /// The caller must cancel the superseded token on the host side.
    pub fn arm(&mut self) -> (TimerToken, Option<TimerToken>) {
        self.next += 1;
        let token = TimerToken(self.next);
        let superseded = self.live.replace(token);
        (token, superseded)
    }

    /// Consume `token` if it is the live one. Stale tokens return `false`.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.live == Some(token) {
            self.live = None;
            true
        } else {
            false
        }
    }

    /// Drop the live token, returning it so the host can cancel it.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.live.take()
    }

    /// The token currently pending, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerToken> {
        self.live
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}
