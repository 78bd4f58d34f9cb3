use super::*;

#[test]
fn new_slot_has_nothing_pending() {
    let slot = TimerSlot::new();
    assert!(!slot.is_pending());
    assert_eq!(slot.pending(), None);
}

#[test]
fn arm_issues_increasing_tokens() {
    let mut slot = TimerSlot::new();
    let (a, _) = slot.arm();
    let (b, _) = slot.arm();
    assert!(b > a);
    assert_ne!(a.get(), b.get());
}

#[test]
fn arm_reports_superseded_token() {
    let mut slot = TimerSlot::new();
    let (first, none) = slot.arm();
    assert_eq!(none, None);
    let (second, superseded) = slot.arm();
    assert_eq!(superseded, Some(first));
    assert_eq!(slot.pending(), Some(second));
}

#[test]
fn fire_accepts_live_token_once() {
    let mut slot = TimerSlot::new();
    let (token, _) = slot.arm();
    assert!(slot.fire(token));
    assert!(!slot.fire(token));
    assert!(!slot.is_pending());
}

#[test]
fn fire_rejects_superseded_token() {
    let mut slot = TimerSlot::new();
    let (old, _) = slot.arm();
    let (new, _) = slot.arm();
    assert!(!slot.fire(old));
    assert!(slot.is_pending());
    assert!(slot.fire(new));
}

#[test]
fn cancel_returns_live_token_and_invalidates_it() {
    let mut slot = TimerSlot::new();
    let (token, _) = slot.arm();
    assert_eq!(slot.cancel(), Some(token));
    assert_eq!(slot.cancel(), None);
    assert!(!slot.fire(token));
}

#[test]
fn tokens_are_not_reused_after_cancel() {
    let mut slot = TimerSlot::new();
    let (a, _) = slot.arm();
    slot.cancel();
    let (b, superseded) = slot.arm();
    assert_eq!(superseded, None);
    assert_ne!(a, b);
}
