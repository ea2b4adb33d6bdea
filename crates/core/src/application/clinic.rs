// Clinic App Shell - login routes to a dashboard, logout tears it down

use super::config::SimulationConfig;
use super::patient::PatientQueueService;
use super::roster::RosterBoard;
use super::session::{LoginRequest, SessionHolder};
use crate::domain::{Identity, Role};
use crate::error::Result;
use crate::port::{
    IdProvider, Notifier, RandomSource, SessionObserver, SystemTimeProvider, ThreadRandomSource,
    TimeProvider, TracingSessionObserver, UuidProvider,
};
use std::sync::Arc;
use tracing::info;

/// Injected collaborators (DI wiring happens in the binary)
#[derive(Clone)]
pub struct ClinicDeps {
    pub id_provider: Arc<dyn IdProvider>,
    pub time_provider: Arc<dyn TimeProvider>,
    pub random: Arc<dyn RandomSource>,
    pub notifier: Arc<dyn Notifier>,
    pub session_observer: Arc<dyn SessionObserver>,
}

impl ClinicDeps {
    /// Production providers around the given notifier
    pub fn production(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            id_provider: Arc::new(UuidProvider),
            time_provider: Arc::new(SystemTimeProvider),
            random: Arc::new(ThreadRandomSource),
            notifier,
            session_observer: Arc::new(TracingSessionObserver),
        }
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }
}

/// Dashboard for the logged-in role
///
/// The two dashboards keep independent data sets.
pub enum Dashboard {
    Patient(PatientQueueService),
    Doctor(RosterBoard),
}

impl Dashboard {
    pub fn role(&self) -> Role {
        match self {
            Dashboard::Patient(_) => Role::Patient,
            Dashboard::Doctor(_) => Role::Doctor,
        }
    }
}

pub struct ClinicApp {
    config: SimulationConfig,
    deps: ClinicDeps,
    session: SessionHolder,
    dashboard: Option<Dashboard>,
}

impl ClinicApp {
    /// Fails only on an invalid configuration
    pub fn new(config: SimulationConfig, deps: ClinicDeps) -> Result<Self> {
        config.validate()?;
        let session = SessionHolder::new(
            Arc::clone(&deps.id_provider),
            Arc::clone(&deps.session_observer),
        );
        Ok(Self {
            config,
            deps,
            session,
            dashboard: None,
        })
    }

    /// Log in and open the dashboard for the role
    ///
    /// Any previous dashboard (and its ticker) is torn down first.
    pub fn login(&mut self, req: LoginRequest) -> Identity {
        self.dashboard = None;

        let identity = self.session.login(req).clone();
        let dashboard = match identity.role {
            Role::Patient => Dashboard::Patient(PatientQueueService::new(
                self.config.clone(),
                Arc::clone(&self.deps.random),
                Arc::clone(&self.deps.notifier),
                Arc::clone(&self.deps.time_provider),
            )),
            Role::Doctor => Dashboard::Doctor(RosterBoard::seeded(
                self.config.consultation_minutes,
                Arc::clone(&self.deps.notifier),
                Arc::clone(&self.deps.time_provider),
            )),
        };

        info!(role = %identity.role, "Dashboard opened");
        self.dashboard = Some(dashboard);
        identity
    }

    /// Drop the dashboard and clear the session; no-op when logged out
    pub fn logout(&mut self) -> Option<Identity> {
        if self.dashboard.take().is_some() {
            info!("Dashboard closed");
        }
        self.session.logout()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.current()
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn patient(&mut self) -> Option<&mut PatientQueueService> {
        match self.dashboard.as_mut()? {
            Dashboard::Patient(service) => Some(service),
            Dashboard::Doctor(_) => None,
        }
    }

    pub fn doctor(&mut self) -> Option<&mut RosterBoard> {
        match self.dashboard.as_mut()? {
            Dashboard::Doctor(board) => Some(board),
            Dashboard::Patient(_) => None,
        }
    }
}
