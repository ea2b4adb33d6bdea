// Doctor Roster Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, Result};

/// Roster entry ID
pub type EntryId = u32;

/// Seed list for a doctor session: (name, join time)
const SEED_PATIENTS: [(&str, &str); 5] = [
    ("John Smith", "09:30 AM"),
    ("Sarah Johnson", "09:45 AM"),
    ("Mike Davis", "10:00 AM"),
    ("Emily Brown", "10:15 AM"),
    ("Robert Wilson", "10:30 AM"),
];

/// Entry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Waiting,
    Called,
    Completed,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Waiting => write!(f, "Waiting"),
            EntryStatus::Called => write!(f, "Called"),
            EntryStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// One patient on the doctor's roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: EntryId,
    pub name: String,
    pub queue_number: u32,
    pub join_time: String,
    pub status: EntryStatus,
}

impl QueueEntry {
    pub fn new(
        id: EntryId,
        name: impl Into<String>,
        queue_number: u32,
        join_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            queue_number,
            join_time: join_time.into(),
            status: EntryStatus::Waiting,
        }
    }

    /// Waiting -> Called
    pub fn call(&mut self) -> Result<()> {
        if self.status != EntryStatus::Waiting {
            return Err(DomainError::InvalidStateTransition {
                from: self.status.to_string(),
                to: EntryStatus::Called.to_string(),
            });
        }
        self.status = EntryStatus::Called;
        Ok(())
    }

    /// Called -> Completed
    pub fn complete(&mut self) -> Result<()> {
        if self.status != EntryStatus::Called {
            return Err(DomainError::InvalidStateTransition {
                from: self.status.to_string(),
                to: EntryStatus::Completed.to_string(),
            });
        }
        self.status = EntryStatus::Completed;
        Ok(())
    }
}

/// Counts shown on the doctor dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStats {
    pub waiting: usize,
    pub completed: usize,
    pub total: usize,
}

impl RosterStats {
    pub fn from_entries(entries: &[QueueEntry]) -> Self {
        let count = |status: EntryStatus| entries.iter().filter(|e| e.status == status).count();
        Self {
            waiting: count(EntryStatus::Waiting),
            completed: count(EntryStatus::Completed),
            total: entries.len(),
        }
    }
}

/// The fixed five-patient roster, ids and queue numbers 1..=5, all waiting
pub fn seed_roster() -> Vec<QueueEntry> {
    SEED_PATIENTS
        .iter()
        .zip(1u32..)
        .map(|((name, join_time), n)| QueueEntry::new(n, *name, n, *join_time))
        .collect()
}
