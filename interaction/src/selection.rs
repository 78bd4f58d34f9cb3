//! Text-selection state machine.
//!
//! Decides whether the user is currently selecting text, so decorative
//! parallax motion never fights with a selection gesture. Browsers clear the
//! selection asynchronously relative to mouse events, so leaving `Selecting`
//! always goes through a settle timer that any newer qualifying signal
//! cancels outright.
//!
//! | Signal | Condition | Effect |
//! |--------|-----------|--------|
//! | pointer-down | plain target | cancel settle, enter `Selecting` |
//! | selection-start | | cancel settle, enter `Selecting` |
//! | selection-change | non-empty | cancel settle, enter `Selecting` |
//! | selection-change | empty | settle 500 ms → `Idle` |
//! | pointer-up | not an input | settle 300 ms → `Idle` if still empty |
//! | click | empty | settle 100 ms → `Idle` |

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::command::Command;
use crate::config::TargetKind;
use crate::timer::{TimerSlot, TimerToken};
use crate::timing::{CLICK_SETTLE_MS, POINTER_UP_SETTLE_MS, SELECTION_CLEARED_SETTLE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting,
}

impl SelectionState {
    #[must_use]
    pub fn is_selecting(self) -> bool {
        matches!(self, Self::Selecting)
    }
}

/// What a pending settle timer checks before committing to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleRule {
    /// Commit unconditionally.
    Always,
    /// Commit only if the live selection is still empty at expiry.
    IfSelectionEmpty,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
    settle: TimerSlot,
    rule: Option<SettleRule>,
}

impl SelectionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.state.is_selecting()
    }

    /// Token of the settle timer currently pending, if any.
    #[must_use]
    pub fn pending_settle(&self) -> Option<TimerToken> {
        self.settle.pending()
    }

    pub fn pointer_down(&mut self, target: TargetKind) -> Vec<Command> {
        if target.is_excluded() {
            return Vec::new();
        }
        self.enter_selecting()
    }

    pub fn pointer_up(&mut self, target: TargetKind) -> Vec<Command> {
        if target == TargetKind::Input {
            return Vec::new();
        }
        self.start_settle(SettleRule::IfSelectionEmpty, POINTER_UP_SETTLE_MS)
    }

    pub fn select_start(&mut self) -> Vec<Command> {
        self.enter_selecting()
    }

    pub fn selection_change(&mut self, selection_empty: bool) -> Vec<Command> {
        if selection_empty {
            self.start_settle(SettleRule::Always, SELECTION_CLEARED_SETTLE_MS)
        } else {
            self.enter_selecting()
        }
    }

    pub fn click(&mut self, selection_empty: bool) -> Vec<Command> {
        if !selection_empty {
            return Vec::new();
        }
        self.start_settle(SettleRule::Always, CLICK_SETTLE_MS)
    }

    /// Settle timer expiry. Superseded or cancelled tokens are ignored.
    pub fn settle_elapsed(&mut self, token: TimerToken, selection_empty: bool) -> Vec<Command> {
        if !self.settle.fire(token) {
            log::debug!("ignoring stale settle timer {}", token.get());
            return Vec::new();
        }
        let rule = self.rule.take();
        if rule == Some(SettleRule::IfSelectionEmpty) && !selection_empty {
            return Vec::new();
        }
        let mut out = Vec::new();
        self.set_state(SelectionState::Idle, &mut out);
        out
    }

    /// Cancel any pending settle timer without changing state.
    pub fn teardown(&mut self) -> Vec<Command> {
        self.rule = None;
        self.settle.cancel().map(Command::CancelSettle).into_iter().collect()
    }

    fn enter_selecting(&mut self) -> Vec<Command> {
        let mut out = self.teardown();
        self.set_state(SelectionState::Selecting, &mut out);
        out
    }

    fn start_settle(&mut self, rule: SettleRule, delay_ms: u32) -> Vec<Command> {
        let mut out = Vec::new();
        let (token, superseded) = self.settle.arm();
        if let Some(old) = superseded {
            out.push(Command::CancelSettle(old));
        }
        self.rule = Some(rule);
        out.push(Command::ScheduleSettle { token, delay_ms });
        out
    }

    fn set_state(&mut self, next: SelectionState, out: &mut Vec<Command>) {
        if self.state == next {
            return;
        }
        log::debug!("selection {:?} -> {next:?}", self.state);
        self.state = next;
        out.push(Command::SelectingChanged(next.is_selecting()));
    }
}
