//! Per-page interaction core.
//!
//! `InteractionCore` is the testable half of an interaction session: it owns
//! the selection machine, the pointer sampler and the hard-freeze flag, and
//! turns raw input signals into [`Command`]s. The browser half (event
//! listeners, timeouts, animation frames) lives in the client and holds no
//! logic of its own.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::command::Command;
use crate::config::{InteractionConfig, TargetKind};
use crate::parallax::{Translation2D, render_offset};
use crate::pointer::{PointerPosition, PointerSampler};
use crate::selection::SelectionMachine;
use crate::timer::TimerToken;

#[derive(Debug, Clone, Default)]
pub struct InteractionCore {
    config: InteractionConfig,
    selection: SelectionMachine,
    sampler: PointerSampler,
    frozen: bool,
}

impl InteractionCore {
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.selection.is_selecting()
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[must_use]
    pub fn pointer(&self) -> PointerPosition {
        self.sampler.latest()
    }

    /// Offset a parallax layer at `speed` should currently render.
    #[must_use]
    pub fn offset(&self, speed: f64) -> Translation2D {
        render_offset(self.is_selecting(), self.pointer(), speed)
    }

    // --- Input signals ---

    pub fn pointer_move(&mut self, position: PointerPosition, target: TargetKind) -> Vec<Command> {
        if self.frozen || self.is_selecting() || target.is_excluded() {
            return Vec::new();
        }
        self.sampler.sample(position)
    }

    pub fn pointer_down(&mut self, target: TargetKind) -> Vec<Command> {
        if self.frozen {
            return Vec::new();
        }
        let out = self.selection.pointer_down(target);
        self.after_selection(out)
    }

    pub fn pointer_up(&mut self, target: TargetKind) -> Vec<Command> {
        if self.frozen {
            return Vec::new();
        }
        self.selection.pointer_up(target)
    }

    pub fn select_start(&mut self) -> Vec<Command> {
        let out = self.selection.select_start();
        self.after_selection(out)
    }

    pub fn selection_change(&mut self, selection_empty: bool) -> Vec<Command> {
        let out = self.selection.selection_change(selection_empty);
        self.after_selection(out)
    }

    pub fn click(&mut self, selection_empty: bool) -> Vec<Command> {
        self.selection.click(selection_empty)
    }

    /// Engage or release the page-level hard freeze (input focus).
    ///
    /// Ignored on pages whose config does not opt into freezing.
    pub fn set_frozen(&mut self, frozen: bool) -> Vec<Command> {
        if !self.config.freeze_on_focus || self.frozen == frozen {
            return Vec::new();
        }
        log::debug!("interaction freeze {frozen}");
        self.frozen = frozen;
        if frozen { self.sampler.cancel() } else { Vec::new() }
    }

    // --- Timer callbacks ---

    pub fn settle_elapsed(&mut self, token: TimerToken, selection_empty: bool) -> Vec<Command> {
        self.selection.settle_elapsed(token, selection_empty)
    }

    pub fn frame_elapsed(&mut self, token: TimerToken) -> Vec<Command> {
        if self.frozen || self.is_selecting() {
            return Vec::new();
        }
        self.sampler.frame_elapsed(token).map(Command::PointerMoved).into_iter().collect()
    }

    /// Cancel everything pending. Called when the owning view goes away.
    pub fn teardown(&mut self) -> Vec<Command> {
        let mut out = self.selection.teardown();
        out.extend(self.sampler.cancel());
        out
    }

    /// Entering `Selecting` discards any frame still waiting to commit a
    /// pre-selection pointer sample.
    fn after_selection(&mut self, mut out: Vec<Command>) -> Vec<Command> {
        if out.contains(&Command::SelectingChanged(true)) {
            out.extend(self.sampler.cancel());
        }
        out
    }
}
