//! Doctor roster scenarios.

use std::sync::Arc;

use clinic_queue_core::application::RosterBoard;
use clinic_queue_core::domain::{EntryStatus, NotificationKind, RosterStats};
use clinic_queue_core::port::notifier::mocks::RecordingNotifier;
use clinic_queue_core::port::time_provider::mocks::FixedTimeProvider;

fn board() -> (RosterBoard, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let board = RosterBoard::seeded(15, notifier.clone(), Arc::new(FixedTimeProvider(0)));
    (board, notifier)
}

/// 5 waiting -> call #1 -> complete -> {waiting: 4, completed: 1, total: 5}
#[test]
fn test_call_and_complete_first_patient() {
    let (mut board, _) = board();

    let called = board.call_next().unwrap();
    assert_eq!(called.id, 1);
    assert_eq!(called.name, "John Smith");

    board.complete_current().unwrap();

    assert_eq!(
        board.stats(),
        RosterStats {
            waiting: 4,
            completed: 1,
            total: 5
        }
    );
    assert!(board.current().is_none());
    assert_eq!(board.next_waiting().map(|e| e.id), Some(2));
}

/// Working the whole roster serves patients in seed order and then goes quiet
#[test]
fn test_work_through_entire_roster() {
    let (mut board, notifier) = board();
    let mut served = Vec::new();

    while let Some(entry) = board.call_next() {
        served.push(entry.queue_number);
        board.complete_current();
    }

    assert_eq!(served, vec![1, 2, 3, 4, 5]);
    assert!(board
        .entries()
        .iter()
        .all(|e| e.status == EntryStatus::Completed));

    // Exhausted: both actions are silent no-ops now
    assert!(board.call_next().is_none());
    assert!(board.complete_current().is_none());
    assert_eq!(notifier.count(NotificationKind::PatientCalled), 5);
    assert_eq!(notifier.count(NotificationKind::ConsultationCompleted), 5);
    assert_eq!(board.stats().total, 5);
}

/// Entries serialize with lowercase statuses for JSON output
#[test]
fn test_entries_serialize() {
    let (mut board, _) = board();
    board.call_next();

    let json = serde_json::to_value(board.entries()).unwrap();
    assert_eq!(json[0]["status"], "called");
    assert_eq!(json[1]["status"], "waiting");
    assert_eq!(json[0]["join_time"], "09:30 AM");
}
