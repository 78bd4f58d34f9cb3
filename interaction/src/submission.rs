//! Contact form submission lifecycle.
//!
//! There is no backend. A submission is simulated: `Idle → Sending` on submit,
//! `Sending → Success` after [`SEND_DELAY_MS`], `Success → Idle` after
//! [`SUCCESS_DISPLAY_MS`]. Nothing can fail, so there is no error state.
//!
//! [`ContactFormModel`] ties the lifecycle to the persisted draft: the draft is
//! cleared from storage and reset in memory on entering `Success`, never
//! earlier, so an interrupted send keeps the typed message.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::draft::{ContactDraft, DraftField, DraftStorage, DraftStore};
use crate::timer::{TimerSlot, TimerToken};
use crate::timing::{SEND_DELAY_MS, SUCCESS_DISPLAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

impl FormStatus {
    /// Label shown on the submit button.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Success => "Message Sent!",
        }
    }

    /// The form only accepts a new submission while idle.
    #[must_use]
    pub fn accepts_submit(self) -> bool {
        self == Self::Idle
    }
}

/// Work the host must perform for the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionCommand {
    /// Arm a timeout; on expiry call `timer_elapsed(token)`.
    ScheduleTimer { token: TimerToken, delay_ms: u32 },
    CancelTimer(TimerToken),
    StatusChanged(FormStatus),
    /// The in-memory draft was reset; re-read every bound field.
    DraftReset,
}

/// Status machine with its single pending timer.
#[derive(Debug, Clone, Default)]
pub struct SubmissionMachine {
    status: FormStatus,
    timer: TimerSlot,
}

impl SubmissionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Begin a simulated send. Ignored unless idle.
    pub fn submit(&mut self) -> Vec<SubmissionCommand> {
        if !self.status.accepts_submit() {
            log::debug!("submit ignored while {:?}", self.status);
            return Vec::new();
        }
        self.transition(FormStatus::Sending, Some(SEND_DELAY_MS))
    }

    pub fn timer_elapsed(&mut self, token: TimerToken) -> Vec<SubmissionCommand> {
        if !self.timer.fire(token) {
            log::debug!("ignoring stale submission timer {}", token.get());
            return Vec::new();
        }
        match self.status {
            FormStatus::Sending => self.transition(FormStatus::Success, Some(SUCCESS_DISPLAY_MS)),
            FormStatus::Success => self.transition(FormStatus::Idle, None),
            FormStatus::Idle => Vec::new(),
        }
    }

    /// Cancel the pending timer, leaving the status where it is.
    pub fn teardown(&mut self) -> Vec<SubmissionCommand> {
        self.timer.cancel().map(SubmissionCommand::CancelTimer).into_iter().collect()
    }

    fn transition(&mut self, next: FormStatus, then_ms: Option<u32>) -> Vec<SubmissionCommand> {
        log::debug!("contact form {:?} -> {next:?}", self.status);
        self.status = next;
        let mut out = vec![SubmissionCommand::StatusChanged(next)];
        if let Some(delay_ms) = then_ms {
            let (token, superseded) = self.timer.arm();
            if let Some(old) = superseded {
                out.insert(0, SubmissionCommand::CancelTimer(old));
            }
            out.push(SubmissionCommand::ScheduleTimer { token, delay_ms });
        }
        out
    }
}

/// Contact form state: the live draft, its store and the submission status.
#[derive(Debug)]
pub struct ContactFormModel<S> {
    store: DraftStore<S>,
    draft: ContactDraft,
    machine: SubmissionMachine,
}

impl<S: DraftStorage> ContactFormModel<S> {
    /// Mount the form, restoring whatever draft is persisted.
    pub fn mount(store: DraftStore<S>) -> Self {
        let draft = store.load();
        Self { store, draft, machine: SubmissionMachine::new() }
    }

    #[must_use]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.machine.status()
    }

    /// Apply one field edit and persist the whole draft.
    pub fn edit(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
        self.store.save(&self.draft);
    }

    /// Submit the current draft. Incomplete drafts are not sent.
    pub fn submit(&mut self) -> Vec<SubmissionCommand> {
        if !self.draft.is_complete() {
            log::debug!("submit ignored: draft incomplete");
            return Vec::new();
        }
        self.machine.submit()
    }

    pub fn timer_elapsed(&mut self, token: TimerToken) -> Vec<SubmissionCommand> {
        let mut out = self.machine.timer_elapsed(token);
        if out.contains(&SubmissionCommand::StatusChanged(FormStatus::Success)) {
            self.store.clear();
            self.draft = ContactDraft::default();
            out.push(SubmissionCommand::DraftReset);
        }
        out
    }

    pub fn teardown(&mut self) -> Vec<SubmissionCommand> {
        self.machine.teardown()
    }
}
