//! `clinic-queue patient`: join the queue and follow it until called

use crate::render::{self, OutputFormat};
use anyhow::{Context, Result};
use clinic_queue_core::application::{ClinicApp, LoginRequest};
use clinic_queue_core::domain::{Notification, QueuePhase};
use std::future::Future;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

pub async fn run(
    app: &mut ClinicApp,
    req: LoginRequest,
    leave_after: Option<u32>,
    notifications: &mut UnboundedReceiver<Notification>,
    interrupt: impl Future<Output = std::io::Result<()>>,
    format: OutputFormat,
) -> Result<()> {
    let identity = app.login(req);
    render::identity(&identity, format)?;

    let patient = app.patient().context("Patient dashboard is not open")?;
    let joined = patient.join();
    render::patient_state(&joined, format)?;

    // Subscribe after joining so the join itself is not replayed
    let mut updates = patient.subscribe();
    let mut ticks = 0u32;
    let mut phase = joined.phase();
    // Pinned once so a signal between iterations is not lost
    tokio::pin!(interrupt);
    let mut interrupted = false;

    while phase == QueuePhase::Waiting {
        tokio::select! {
            Some(n) = notifications.recv() => render::notification(&n, format)?,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                render::patient_state(&state, format)?;
                ticks += 1;
                phase = state.phase();

                if phase == QueuePhase::Waiting && leave_after.is_some_and(|limit| ticks >= limit) {
                    info!(ticks, "Leaving queue early");
                    patient.leave();
                    phase = patient.phase();
                }
            }
            _ = &mut interrupt, if !interrupted => {
                interrupted = true;
                info!("Interrupted, leaving queue");
                patient.leave();
                phase = patient.phase();
            }
        }
    }

    // Flush notifications emitted on the way out
    while let Ok(n) = notifications.try_recv() {
        render::notification(&n, format)?;
    }

    Ok(())
}
