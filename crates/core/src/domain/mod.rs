// Domain Layer - Pure state machines and entities

pub mod error;
pub mod identity;
pub mod notification;
pub mod patient_queue;
pub mod roster;

// Re-exports
pub use error::DomainError;
pub use identity::{Identity, IdentityId, Role};
pub use notification::{Notification, NotificationKind};
pub use patient_queue::{PatientQueueState, PatientStatus, QueueDraw, QueuePhase, TickOutcome};
pub use roster::{seed_roster, EntryId, EntryStatus, QueueEntry, RosterStats};
