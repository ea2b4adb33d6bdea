// Queue Ticker - recurring timer that advances a waiting patient
//
// Lives only while the patient is in the queue with patients ahead. Stops on
// its own when that no longer holds or when its handle is dropped.

use super::cancel::{cancel_channel, CancelSender, CancelToken};
use super::QueueShared;
use crate::domain::TickOutcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Owning handle for a running ticker
///
/// Dropping it signals the cancel token; the task exits at its next wake-up
/// without applying another tick.
pub(crate) struct TickerHandle {
    cancel: CancelSender,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Spawn a ticker for the queue generation `generation`
    ///
    /// Requires a tokio runtime.
    pub(crate) fn spawn(shared: Arc<QueueShared>, generation: u64, period: Duration) -> Self {
        let (cancel, token) = cancel_channel();
        let task = tokio::spawn(run(shared, generation, period, token));
        Self { cancel, task }
    }

    pub(crate) fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(shared: Arc<QueueShared>, generation: u64, period: Duration, mut token: CancelToken) {
    // First tick one full period after joining
    let mut tick = interval_at(Instant::now() + period, period);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    debug!(
        generation,
        period_ms = period.as_millis() as u64,
        "Queue ticker started"
    );

    loop {
        if token.is_cancelled() || !shared.needs_ticking() {
            break;
        }

        tokio::select! {
            biased;

            _ = token.wait() => {
                debug!(generation, "Queue ticker cancelled");
                break;
            }
            _ = tick.tick() => {
                // Idle means the queue moved on (leave / rejoin) under us
                if shared.tick(generation) == TickOutcome::Idle {
                    break;
                }
            }
        }
    }

    debug!(generation, "Queue ticker stopped");
}
