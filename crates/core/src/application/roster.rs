// Roster Board - doctor-side queue over a fixed seed list

use super::constants::{MAX_CONSULTATION_MINUTES, MIN_CONSULTATION_MINUTES};
use crate::domain::{
    seed_roster, DomainError, EntryId, EntryStatus, Notification, QueueEntry, RosterStats,
};
use crate::error::Result;
use crate::port::{Notifier, TimeProvider};
use std::sync::Arc;
use tracing::{info, warn};

/// Doctor's view of the queue
///
/// Entries are never added or removed; only their status moves
/// Waiting -> Called -> Completed. Unmet preconditions are silent no-ops.
pub struct RosterBoard {
    entries: Vec<QueueEntry>,
    current: Option<EntryId>,
    consultation_minutes: u32,
    notifier: Arc<dyn Notifier>,
    time_provider: Arc<dyn TimeProvider>,
}

impl RosterBoard {
    pub fn new(
        entries: Vec<QueueEntry>,
        consultation_minutes: u32,
        notifier: Arc<dyn Notifier>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            entries,
            current: None,
            consultation_minutes: clamp_consultation(consultation_minutes),
            notifier,
            time_provider,
        }
    }

    /// Board over the fixed five-patient seed list
    pub fn seeded(
        consultation_minutes: u32,
        notifier: Arc<dyn Notifier>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self::new(seed_roster(), consultation_minutes, notifier, time_provider)
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn current(&self) -> Option<&QueueEntry> {
        let id = self.current?;
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entry `call_next` would pick: first Waiting in seed order
    pub fn next_waiting(&self) -> Option<&QueueEntry> {
        self.entries
            .iter()
            .find(|e| e.status == EntryStatus::Waiting)
    }

    /// Whether a view should offer "Call Next Patient"
    pub fn can_call_next(&self) -> bool {
        self.current.is_none() && self.next_waiting().is_some()
    }

    pub fn stats(&self) -> RosterStats {
        RosterStats::from_entries(&self.entries)
    }

    pub fn consultation_minutes(&self) -> u32 {
        self.consultation_minutes
    }

    /// Update the consultation time setting, clamped to 5..=60; returns the stored value
    pub fn set_consultation_minutes(&mut self, minutes: u32) -> u32 {
        self.consultation_minutes = clamp_consultation(minutes);
        self.consultation_minutes
    }

    /// Call the earliest waiting entry and make it current
    ///
    /// No-op returning `None` when nobody is waiting.
    pub fn call_next(&mut self) -> Option<QueueEntry> {
        let Some(id) = self.next_waiting().map(|e| e.id) else {
            warn!("Call next ignored: nobody waiting");
            return None;
        };

        if let Some(previous) = self.current {
            warn!(entry_id = previous, "Calling next while a consultation is open");
        }

        let entry = match self.transition(id, QueueEntry::call) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(entry_id = id, error = %e, "Call next rejected");
                return None;
            }
        };
        self.current = Some(id);

        info!(
            entry_id = entry.id,
            queue_number = entry.queue_number,
            "Patient called"
        );
        self.notifier.notify(Notification::patient_called(
            &entry.name,
            entry.queue_number,
            self.time_provider.now_millis(),
        ));

        Some(entry)
    }

    /// Mark the current entry completed and clear it
    ///
    /// No-op returning `None` without a current entry.
    pub fn complete_current(&mut self) -> Option<QueueEntry> {
        let Some(id) = self.current else {
            warn!("Complete ignored: no current patient");
            return None;
        };

        let entry = match self.transition(id, QueueEntry::complete) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(entry_id = id, error = %e, "Complete rejected");
                return None;
            }
        };
        self.current = None;

        info!(entry_id = entry.id, "Consultation completed");
        self.notifier.notify(Notification::consultation_completed(
            &entry.name,
            self.time_provider.now_millis(),
        ));

        Some(entry)
    }

    fn transition(
        &mut self,
        id: EntryId,
        apply: fn(&mut QueueEntry) -> crate::domain::error::Result<()>,
    ) -> Result<QueueEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::EntryNotFound(id))?;
        apply(entry)?;
        Ok(entry.clone())
    }
}

fn clamp_consultation(minutes: u32) -> u32 {
    minutes.clamp(MIN_CONSULTATION_MINUTES, MAX_CONSULTATION_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationKind;
    use crate::port::notifier::mocks::RecordingNotifier;
    use crate::port::time_provider::mocks::FixedTimeProvider;

    fn board() -> (RosterBoard, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let board = RosterBoard::seeded(15, notifier.clone(), Arc::new(FixedTimeProvider(7)));
        (board, notifier)
    }

    #[test]
    fn test_fresh_board() {
        let (board, _) = board();
        assert!(board.current().is_none());
        assert!(board.can_call_next());
        assert_eq!(board.next_waiting().map(|e| e.id), Some(1));
        assert_eq!(
            board.stats(),
            RosterStats {
                waiting: 5,
                completed: 0,
                total: 5
            }
        );
    }

    #[test]
    fn test_call_then_complete_first_patient() {
        let (mut board, notifier) = board();

        let called = board.call_next().unwrap();
        assert_eq!(called.id, 1);
        assert_eq!(called.status, EntryStatus::Called);
        assert_eq!(board.current().map(|e| e.id), Some(1));
        assert!(!board.can_call_next());

        let done = board.complete_current().unwrap();
        assert_eq!(done.status, EntryStatus::Completed);
        assert!(board.current().is_none());

        assert_eq!(
            board.stats(),
            RosterStats {
                waiting: 4,
                completed: 1,
                total: 5
            }
        );
        assert_eq!(
            notifier.kinds(),
            vec![
                NotificationKind::PatientCalled,
                NotificationKind::ConsultationCompleted
            ]
        );
        assert_eq!(
            notifier.all()[0].description,
            "John Smith (Queue #1) has been called."
        );
    }

    #[test]
    fn test_complete_without_current_is_noop() {
        let (mut board, notifier) = board();
        assert!(board.complete_current().is_none());
        assert_eq!(board.stats().completed, 0);
        assert!(notifier.all().is_empty());
    }

    #[test]
    fn test_exhausted_roster_ignores_call_next() {
        let (mut board, _) = board();
        for expected in 1..=5 {
            assert_eq!(board.call_next().map(|e| e.id), Some(expected));
            board.complete_current();
        }

        assert!(board.call_next().is_none());
        assert!(!board.can_call_next());
        assert_eq!(
            board.stats(),
            RosterStats {
                waiting: 0,
                completed: 5,
                total: 5
            }
        );
    }

    #[test]
    fn test_call_next_follows_seed_order_not_join_time() {
        let notifier = Arc::new(RecordingNotifier::default());
        let entries = vec![
            QueueEntry::new(10, "Late Arrival", 2, "11:00 AM"),
            QueueEntry::new(11, "Early Bird", 1, "08:00 AM"),
        ];
        let mut board = RosterBoard::new(entries, 15, notifier, Arc::new(FixedTimeProvider(0)));
        assert_eq!(board.call_next().map(|e| e.id), Some(10));
    }

    #[test]
    fn test_call_next_while_current_moves_current() {
        let (mut board, _) = board();
        board.call_next();
        let second = board.call_next().unwrap();

        assert_eq!(second.id, 2);
        assert_eq!(board.current().map(|e| e.id), Some(2));
        // The displaced entry stays Called
        assert_eq!(board.entries()[0].status, EntryStatus::Called);
        assert_eq!(board.stats().waiting, 3);
    }

    #[test]
    fn test_consultation_minutes_clamped() {
        let (mut board, _) = board();
        assert_eq!(board.consultation_minutes(), 15);
        assert_eq!(board.set_consultation_minutes(1), 5);
        assert_eq!(board.set_consultation_minutes(90), 60);
        assert_eq!(board.set_consultation_minutes(30), 30);
    }

    #[test]
    fn test_empty_roster() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut board = RosterBoard::new(vec![], 15, notifier, Arc::new(FixedTimeProvider(0)));
        assert!(board.call_next().is_none());
        assert_eq!(board.stats(), RosterStats::default());
    }
}
