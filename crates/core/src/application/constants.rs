// Simulation constants (no magic values)
use std::time::Duration;

/// Period of the patient queue ticker (10s)
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(10);

/// Estimated consultation length used for the wait estimate
pub const DEFAULT_MINUTES_PER_PATIENT: u32 = 15;

/// Queue numbers are drawn from 1..=50
pub const DEFAULT_MAX_QUEUE_NUMBER: u32 = 50;

/// Patients ahead are drawn from 1..=8
pub const DEFAULT_MAX_PATIENTS_AHEAD: u32 = 8;

/// Doctor-side consultation time setting (minutes)
pub const DEFAULT_CONSULTATION_MINUTES: u32 = 15;
pub const MIN_CONSULTATION_MINUTES: u32 = 5;
pub const MAX_CONSULTATION_MINUTES: u32 = 60;
