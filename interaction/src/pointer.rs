//! Frame-aligned pointer sampling.
//!
//! Raw pointer-move events arrive far faster than the display refreshes.
//! The sampler keeps only the newest qualifying coordinate and commits it
//! from a single animation-frame callback; a newer move before that frame
//! replaces the pending request rather than queueing a second one.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::timer::{TimerSlot, TimerToken};

/// Viewport coordinates of the last committed sample, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PointerSampler {
    latest: PointerPosition,
    pending: Option<PointerPosition>,
    frame: TimerSlot,
}

impl PointerSampler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed position (origin before the first frame).
    #[must_use]
    pub fn latest(&self) -> PointerPosition {
        self.latest
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<TimerToken> {
        self.frame.pending()
    }

    /// Record a qualifying move and (re)request the frame that commits it.
    pub fn sample(&mut self, position: PointerPosition) -> Vec<Command> {
        let mut out = Vec::with_capacity(2);
        let (token, superseded) = self.frame.arm();
        if let Some(old) = superseded {
            out.push(Command::CancelFrame(old));
        }
        self.pending = Some(position);
        out.push(Command::RequestFrame(token));
        out
    }

    /// Frame callback. Returns the committed position, or `None` if `token`
    /// was superseded or cancelled.
    pub fn frame_elapsed(&mut self, token: TimerToken) -> Option<PointerPosition> {
        if !self.frame.fire(token) {
            return None;
        }
        let position = self.pending.take()?;
        self.latest = position;
        Some(position)
    }

    /// Discard any pending sample and return the frame to cancel.
    pub fn cancel(&mut self) -> Vec<Command> {
        self.pending = None;
        self.frame.cancel().map(Command::CancelFrame).into_iter().collect()
    }
}
