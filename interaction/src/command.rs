//! Host instructions returned from interaction handlers.

use crate::pointer::PointerPosition;
use crate::timer::TimerToken;

/// Work the host must perform after feeding an event into the core.
///
/// Commands are emitted in the order they must be applied: a cancellation
/// always precedes the schedule that supersedes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Arm a settle timeout; on expiry call `settle_elapsed(token, ..)`.
    ScheduleSettle { token: TimerToken, delay_ms: u32 },
    /// Clear a previously armed settle timeout.
    CancelSettle(TimerToken),
    /// Request an animation frame; on callback call `frame_elapsed(token)`.
    RequestFrame(TimerToken),
    /// Cancel a previously requested animation frame.
    CancelFrame(TimerToken),
    /// Publish the new selecting flag.
    SelectingChanged(bool),
    /// Publish a freshly sampled pointer position.
    PointerMoved(PointerPosition),
}
