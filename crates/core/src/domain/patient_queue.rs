// Patient Queue Domain Model
//
// NotInQueue -> Waiting -> Called, with leave() from anywhere back to NotInQueue.

use serde::{Deserialize, Serialize};

/// Patient-facing status while in the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Waiting,
    Called,
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatientStatus::Waiting => write!(f, "In Queue"),
            PatientStatus::Called => write!(f, "You're Next!"),
        }
    }
}

/// Derived state-machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueuePhase {
    NotInQueue,
    Waiting,
    Called,
}

/// Values drawn from the random source on join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueDraw {
    pub queue_number: u32,
    pub patients_ahead: u32,
}

/// Result of a single timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Preconditions for ticking did not hold; nothing changed
    Idle,
    /// One patient ahead was served
    Advanced,
    /// The last patient ahead was served and the status flipped to Called
    ReachedFront,
}

/// Simulated queue position for one patient session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientQueueState {
    pub in_queue: bool,
    pub queue_number: Option<u32>,
    pub patients_ahead: u32,
    pub estimated_wait_minutes: u32,
    pub status: PatientStatus,
}

impl Default for PatientQueueState {
    fn default() -> Self {
        Self {
            in_queue: false,
            queue_number: None,
            patients_ahead: 0,
            estimated_wait_minutes: 0,
            status: PatientStatus::Waiting,
        }
    }
}

impl PatientQueueState {
    /// Fresh Waiting state from a draw
    ///
    /// The front-of-queue rule is not applied here; call `settle` afterwards.
    pub fn joined(draw: QueueDraw, minutes_per_patient: u32) -> Self {
        Self {
            in_queue: true,
            queue_number: Some(draw.queue_number),
            patients_ahead: draw.patients_ahead,
            estimated_wait_minutes: draw.patients_ahead.saturating_mul(minutes_per_patient),
            status: PatientStatus::Waiting,
        }
    }

    pub fn phase(&self) -> QueuePhase {
        match (self.in_queue, self.status) {
            (false, _) => QueuePhase::NotInQueue,
            (true, PatientStatus::Waiting) => QueuePhase::Waiting,
            (true, PatientStatus::Called) => QueuePhase::Called,
        }
    }

    /// True while the recurring timer is allowed to run
    pub fn needs_ticking(&self) -> bool {
        self.in_queue && self.patients_ahead > 0
    }

    /// Advance the simulation by one timer period
    pub fn tick(&mut self, minutes_per_patient: u32) -> TickOutcome {
        if !self.needs_ticking() {
            return TickOutcome::Idle;
        }

        self.patients_ahead = self.patients_ahead.saturating_sub(1);
        self.estimated_wait_minutes = self
            .estimated_wait_minutes
            .saturating_sub(minutes_per_patient);

        if self.settle() {
            TickOutcome::ReachedFront
        } else {
            TickOutcome::Advanced
        }
    }

    /// Apply the front-of-queue rule
    ///
    /// Returns true only on the Waiting -> Called edge, so callers can fire
    /// the notification exactly once.
    pub fn settle(&mut self) -> bool {
        if self.in_queue && self.patients_ahead == 0 && self.status == PatientStatus::Waiting {
            self.status = PatientStatus::Called;
            return true;
        }
        false
    }

    /// Back to NotInQueue with every field cleared
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
