// Simulation configuration

use super::constants::*;
use crate::error::{AppError, Result};
use std::time::Duration;

/// Knobs for the queue simulation
///
/// Defaults reproduce the clinic mockup: a 10s ticker, 15 minutes per
/// patient, queue numbers up to 50 and up to 8 patients ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub tick_period: Duration,
    pub minutes_per_patient: u32,
    pub max_queue_number: u32,
    pub max_patients_ahead: u32,
    pub consultation_minutes: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            minutes_per_patient: DEFAULT_MINUTES_PER_PATIENT,
            max_queue_number: DEFAULT_MAX_QUEUE_NUMBER,
            max_patients_ahead: DEFAULT_MAX_PATIENTS_AHEAD,
            consultation_minutes: DEFAULT_CONSULTATION_MINUTES,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_period.is_zero() {
            return Err(AppError::Config("tick period must be non-zero".into()));
        }
        if self.max_queue_number == 0 {
            return Err(AppError::Config("max queue number must be at least 1".into()));
        }
        if self.max_patients_ahead == 0 {
            return Err(AppError::Config(
                "max patients ahead must be at least 1".into(),
            ));
        }
        if !(MIN_CONSULTATION_MINUTES..=MAX_CONSULTATION_MINUTES)
            .contains(&self.consultation_minutes)
        {
            return Err(AppError::Config(format!(
                "consultation minutes must be within {}..={}, got {}",
                MIN_CONSULTATION_MINUTES, MAX_CONSULTATION_MINUTES, self.consultation_minutes
            )));
        }
        Ok(())
    }
}
