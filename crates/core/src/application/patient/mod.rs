// Patient Queue Service - simulated queue position for a patient session

mod cancel;
mod ticker;

pub use cancel::{cancel_channel, CancelSender, CancelToken};

use crate::application::config::SimulationConfig;
use crate::domain::{Notification, PatientQueueState, QueueDraw, QueuePhase, TickOutcome};
use crate::port::{Notifier, RandomSource, TimeProvider};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use ticker::TickerHandle;
use tokio::sync::watch;
use tracing::{debug, info};

/// State shared between the service and its ticker task
pub(crate) struct QueueShared {
    state: watch::Sender<PatientQueueState>,
    /// Bumped on every join/leave so a stale ticker cannot touch a newer queue
    generation: AtomicU64,
    minutes_per_patient: u32,
    notifier: Arc<dyn Notifier>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueShared {
    fn needs_ticking(&self) -> bool {
        self.state.borrow().needs_ticking()
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn advance_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply one tick if `generation` is still current
    ///
    /// The notification is sent while the watch lock is held, so observers
    /// see it no later than the state it belongs to. Notifiers must not
    /// read the queue state.
    fn tick(&self, generation: u64) -> TickOutcome {
        let mut outcome = TickOutcome::Idle;
        self.state.send_if_modified(|state| {
            if self.current_generation() != generation {
                return false;
            }
            outcome = state.tick(self.minutes_per_patient);
            match outcome {
                TickOutcome::Advanced => debug!(
                    patients_ahead = state.patients_ahead,
                    estimated_wait_minutes = state.estimated_wait_minutes,
                    "Queue advanced"
                ),
                TickOutcome::ReachedFront => {
                    info!("Patient reached the front of the queue");
                    self.notifier
                        .notify(Notification::reached_front(self.time_provider.now_millis()));
                }
                TickOutcome::Idle => {}
            }
            outcome != TickOutcome::Idle
        });
        outcome
    }
}

/// Patient-side queue simulation
///
/// Owns the queue state and the recurring ticker. Dropping the service
/// (logout, dashboard teardown) cancels the ticker.
pub struct PatientQueueService {
    shared: Arc<QueueShared>,
    config: SimulationConfig,
    random: Arc<dyn RandomSource>,
    ticker: Option<TickerHandle>,
}

impl PatientQueueService {
    pub fn new(
        config: SimulationConfig,
        random: Arc<dyn RandomSource>,
        notifier: Arc<dyn Notifier>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        let (state, _) = watch::channel(PatientQueueState::default());
        Self {
            shared: Arc::new(QueueShared {
                state,
                generation: AtomicU64::new(0),
                minutes_per_patient: config.minutes_per_patient,
                notifier,
                time_provider,
            }),
            config,
            random,
            ticker: None,
        }
    }

    pub fn snapshot(&self) -> PatientQueueState {
        self.shared.state.borrow().clone()
    }

    pub fn phase(&self) -> QueuePhase {
        self.shared.state.borrow().phase()
    }

    /// Receiver that observes every state change (join, tick, leave)
    pub fn subscribe(&self) -> watch::Receiver<PatientQueueState> {
        self.shared.state.subscribe()
    }

    /// Whether the recurring ticker is currently alive
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(TickerHandle::is_running)
    }

    /// Join (or rejoin) the queue with freshly drawn values
    ///
    /// Must be called from within a tokio runtime; the ticker is spawned here.
    pub fn join(&mut self) -> PatientQueueState {
        self.stop_ticker();

        let draw = QueueDraw {
            queue_number: self.random.next_in_range(1, self.config.max_queue_number),
            patients_ahead: self.random.next_in_range(1, self.config.max_patients_ahead),
        };
        let generation = self.shared.advance_generation();

        let mut next = PatientQueueState::joined(draw, self.config.minutes_per_patient);
        let reached_front = next.settle();
        info!(
            queue_number = draw.queue_number,
            patients_ahead = next.patients_ahead,
            estimated_wait_minutes = next.estimated_wait_minutes,
            "Joined queue"
        );

        // Notify first so a subscriber woken by the new state finds them queued
        let now = self.shared.time_provider.now_millis();
        self.shared
            .notifier
            .notify(Notification::queue_joined(draw.queue_number, now));
        if reached_front {
            self.shared.notifier.notify(Notification::reached_front(now));
        }
        self.shared.state.send_replace(next.clone());

        if !reached_front {
            self.ticker = Some(TickerHandle::spawn(
                Arc::clone(&self.shared),
                generation,
                self.config.tick_period,
            ));
        }

        next
    }

    /// Leave the queue, clearing every field
    ///
    /// Returns false (and stays silent) when not in the queue.
    pub fn leave(&mut self) -> bool {
        self.stop_ticker();

        if !self.shared.state.borrow().in_queue {
            debug!("Leave ignored: not in queue");
            return false;
        }

        self.shared.advance_generation();
        info!("Left queue");
        self.shared.notifier.notify(Notification::queue_left(
            self.shared.time_provider.now_millis(),
        ));
        self.shared.state.send_modify(PatientQueueState::clear);
        true
    }

    /// Apply one tick immediately, outside the timer
    pub fn tick_now(&self) -> TickOutcome {
        self.shared.tick(self.shared.current_generation())
    }

    fn stop_ticker(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Queue ticker stopped by owner");
        }
    }
}

impl Drop for PatientQueueService {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NotificationKind, PatientStatus};
    use crate::port::notifier::mocks::RecordingNotifier;
    use crate::port::random_source::mocks::ScriptedRandomSource;
    use crate::port::time_provider::mocks::FixedTimeProvider;
    use std::time::Duration;
    use tokio::time::sleep;

    const PERIOD: Duration = Duration::from_secs(10);

    fn service(draws: Vec<u32>) -> (PatientQueueService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = PatientQueueService::new(
            SimulationConfig::default(),
            Arc::new(ScriptedRandomSource::new(draws)),
            notifier.clone(),
            Arc::new(FixedTimeProvider(1_000)),
        );
        (service, notifier)
    }

    /// Sleep just past `n` ticker periods (paused clock auto-advances)
    async fn after_ticks(n: u32) {
        sleep(PERIOD * n + Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_draws_and_notifies() {
        let (mut service, notifier) = service(vec![23, 4]);

        let state = service.join();

        assert_eq!(state.queue_number, Some(23));
        assert_eq!(state.patients_ahead, 4);
        assert_eq!(state.estimated_wait_minutes, 60);
        assert_eq!(service.phase(), QueuePhase::Waiting);
        assert!(service.is_ticking());
        assert_eq!(notifier.kinds(), vec![NotificationKind::QueueJoined]);
        assert_eq!(notifier.all()[0].emitted_at, 1_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_period() {
        let (mut service, _) = service(vec![5, 3]);
        service.join();

        sleep(PERIOD - Duration::from_millis(1)).await;
        assert_eq!(service.snapshot().patients_ahead, 3);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(service.snapshot().patients_ahead, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_runs_to_called_then_stops() {
        let (mut service, notifier) = service(vec![5, 3]);
        service.join();

        after_ticks(3).await;
        tokio::task::yield_now().await;

        let state = service.snapshot();
        assert_eq!(state.patients_ahead, 0);
        assert_eq!(state.estimated_wait_minutes, 0);
        assert_eq!(state.status, PatientStatus::Called);
        assert!(!service.is_ticking());
        assert_eq!(notifier.count(NotificationKind::ReachedFront), 1);

        // Called is sticky; nothing further happens
        after_ticks(5).await;
        assert_eq!(service.phase(), QueuePhase::Called);
        assert_eq!(notifier.count(NotificationKind::ReachedFront), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_patient_ahead_called_after_one_tick() {
        let (mut service, _) = service(vec![10, 1]);
        let joined = service.join();
        assert_eq!(joined.estimated_wait_minutes, 15);

        let mut rx = service.subscribe();
        rx.changed().await.unwrap();

        let state = rx.borrow().clone();
        assert_eq!(state.patients_ahead, 0);
        assert_eq!(state.estimated_wait_minutes, 0);
        assert_eq!(state.status, PatientStatus::Called);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leave_cancels_ticker_and_clears_state() {
        let (mut service, notifier) = service(vec![5, 6]);
        service.join();
        after_ticks(1).await;
        assert_eq!(service.snapshot().patients_ahead, 5);

        assert!(service.leave());
        tokio::task::yield_now().await;

        assert!(!service.is_ticking());
        assert_eq!(service.snapshot(), PatientQueueState::default());

        after_ticks(3).await;
        assert_eq!(service.snapshot(), PatientQueueState::default());
        assert_eq!(
            notifier.kinds(),
            vec![NotificationKind::QueueJoined, NotificationKind::QueueLeft]
        );
    }

    #[tokio::test]
    async fn test_leave_when_not_in_queue_is_silent() {
        let (mut service, notifier) = service(vec![]);
        assert!(!service.leave());
        assert!(notifier.all().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejoin_replaces_state_and_ticker() {
        let (mut service, _) = service(vec![5, 1, 40, 3]);
        service.join();
        after_ticks(1).await;
        assert_eq!(service.phase(), QueuePhase::Called);

        let state = service.join();
        assert_eq!(state.queue_number, Some(40));
        assert_eq!(state.status, PatientStatus::Waiting);
        assert!(service.is_ticking());

        after_ticks(1).await;
        assert_eq!(service.snapshot().patients_ahead, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticker() {
        let (mut service, notifier) = service(vec![5, 2]);
        let rx = service.subscribe();
        service.join();

        drop(service);
        after_ticks(3).await;

        // Last published state is the join; no tick ever landed
        assert_eq!(rx.borrow().patients_ahead, 2);
        assert_eq!(notifier.count(NotificationKind::ReachedFront), 0);
    }

    #[tokio::test]
    async fn test_tick_now_advances_without_timer() {
        let (mut service, notifier) = service(vec![5, 2]);
        service.join();

        assert_eq!(service.tick_now(), TickOutcome::Advanced);
        assert_eq!(service.tick_now(), TickOutcome::ReachedFront);
        assert_eq!(service.tick_now(), TickOutcome::Idle);
        assert_eq!(notifier.count(NotificationKind::ReachedFront), 1);
    }

    #[tokio::test]
    async fn test_zero_patients_ahead_is_called_immediately() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut service = PatientQueueService::new(
            SimulationConfig::default(),
            Arc::new(ScriptedRandomSource::unclamped([7, 0])),
            notifier.clone(),
            Arc::new(FixedTimeProvider(0)),
        );

        service.join();
        assert_eq!(service.phase(), QueuePhase::Called);
        assert!(!service.is_ticking());
        assert_eq!(
            notifier.kinds(),
            vec![NotificationKind::QueueJoined, NotificationKind::ReachedFront]
        );
    }
}
