use super::*;
use crate::draft::{DRAFT_STORAGE_KEY, MemoryStorage};

fn schedule_of(out: &[SubmissionCommand]) -> Option<(TimerToken, u32)> {
    out.iter().find_map(|c| match c {
        SubmissionCommand::ScheduleTimer { token, delay_ms } => Some((*token, *delay_ms)),
        _ => None,
    })
}

fn fill(model: &mut ContactFormModel<&MemoryStorage>) {
    model.edit(DraftField::Name, "Ada".to_owned());
    model.edit(DraftField::Email, "ada@example.com".to_owned());
    model.edit(DraftField::Subject, "Hello".to_owned());
    model.edit(DraftField::Message, "Lovely island.".to_owned());
}

// =============================================================
// SubmissionMachine
// =============================================================

#[test]
fn submit_from_idle_enters_sending_and_schedules_send_delay() {
    let mut m = SubmissionMachine::new();
    let out = m.submit();
    assert_eq!(m.status(), FormStatus::Sending);
    assert!(out.contains(&SubmissionCommand::StatusChanged(FormStatus::Sending)));
    assert_eq!(schedule_of(&out).map(|(_, d)| d), Some(1500));
}

#[test]
fn submit_is_ignored_unless_idle() {
    let mut m = SubmissionMachine::new();
    let out = m.submit();
    let (token, _) = schedule_of(&out).unwrap();
    assert!(m.submit().is_empty());

    m.timer_elapsed(token);
    assert_eq!(m.status(), FormStatus::Success);
    assert!(m.submit().is_empty());
}

#[test]
fn full_cycle_returns_to_idle() {
    let mut m = SubmissionMachine::new();
    let (send, _) = schedule_of(&m.submit()).unwrap();
    let out = m.timer_elapsed(send);
    let (shown, delay) = schedule_of(&out).unwrap();
    assert_eq!(delay, 3000);
    let out = m.timer_elapsed(shown);
    assert_eq!(out, vec![SubmissionCommand::StatusChanged(FormStatus::Idle)]);
    assert_eq!(m.status(), FormStatus::Idle);
}

#[test]
fn stale_token_is_inert() {
    let mut m = SubmissionMachine::new();
    let (send, _) = schedule_of(&m.submit()).unwrap();
    m.timer_elapsed(send);
    assert!(m.timer_elapsed(send).is_empty());
    assert_eq!(m.status(), FormStatus::Success);
}

#[test]
fn teardown_cancels_pending_timer() {
    let mut m = SubmissionMachine::new();
    let (send, _) = schedule_of(&m.submit()).unwrap();
    assert_eq!(m.teardown(), vec![SubmissionCommand::CancelTimer(send)]);
    assert!(m.timer_elapsed(send).is_empty());
    assert!(m.teardown().is_empty());
}

#[test]
fn button_labels_follow_status() {
    assert_eq!(FormStatus::Idle.button_label(), "Send Message");
    assert_eq!(FormStatus::Sending.button_label(), "Sending...");
    assert_eq!(FormStatus::Success.button_label(), "Message Sent!");
}

// =============================================================
// ContactFormModel
// =============================================================

#[test]
fn mount_restores_persisted_draft() {
    let storage = MemoryStorage::new();
    storage.insert_raw(DRAFT_STORAGE_KEY, r#"{"name":"Ada"}"#);
    let model = ContactFormModel::mount(DraftStore::new(&storage));
    assert_eq!(model.draft().name, "Ada");
    assert_eq!(model.status(), FormStatus::Idle);
}

#[test]
fn every_edit_is_persisted() {
    let storage = MemoryStorage::new();
    let mut model = ContactFormModel::mount(DraftStore::new(&storage));
    model.edit(DraftField::Email, "a@b.c".to_owned());
    let stored = DraftStore::new(&storage).load();
    assert_eq!(stored.email, "a@b.c");
}

#[test]
fn incomplete_draft_is_not_submitted() {
    let storage = MemoryStorage::new();
    let mut model = ContactFormModel::mount(DraftStore::new(&storage));
    model.edit(DraftField::Name, "Ada".to_owned());
    assert!(model.submit().is_empty());
    assert_eq!(model.status(), FormStatus::Idle);
}

#[test]
fn status_sequence_clears_draft_exactly_at_success() {
    let storage = MemoryStorage::new();
    let mut model = ContactFormModel::mount(DraftStore::new(&storage));
    fill(&mut model);

    let mut statuses = vec![model.status()];

    let out = model.submit();
    statuses.push(model.status());
    let (send, _) = schedule_of(&out).unwrap();
    // Still persisted while sending.
    assert!(storage.raw(DRAFT_STORAGE_KEY).is_some());
    assert_eq!(model.draft().name, "Ada");

    let out = model.timer_elapsed(send);
    statuses.push(model.status());
    assert!(out.contains(&SubmissionCommand::DraftReset));
    assert!(storage.raw(DRAFT_STORAGE_KEY).is_none());
    assert!(model.draft().is_empty());

    let (shown, _) = schedule_of(&out).unwrap();
    let out = model.timer_elapsed(shown);
    statuses.push(model.status());
    assert!(!out.contains(&SubmissionCommand::DraftReset));

    assert_eq!(
        statuses,
        vec![FormStatus::Idle, FormStatus::Sending, FormStatus::Success, FormStatus::Idle]
    );
}

#[test]
fn unmount_mid_send_keeps_draft() {
    let storage = MemoryStorage::new();
    let mut model = ContactFormModel::mount(DraftStore::new(&storage));
    fill(&mut model);
    let (send, _) = schedule_of(&model.submit()).unwrap();
    assert_eq!(model.teardown(), vec![SubmissionCommand::CancelTimer(send)]);
    drop(model);

    let remounted = ContactFormModel::mount(DraftStore::new(&storage));
    assert_eq!(remounted.draft().name, "Ada");
    assert_eq!(remounted.status(), FormStatus::Idle);
}
