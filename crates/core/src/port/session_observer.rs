// Session Observer Port - login/logout callbacks

use crate::domain::{Identity, Role};
use tracing::info;

/// Callback contract between the session holder and the view layer
pub trait SessionObserver: Send + Sync {
    /// Invoked once per (always successful) login
    fn on_login(&self, role: Role, identity: &Identity);

    /// Invoked when an active session is logged out
    fn on_logout(&self);
}

/// Logs session events
pub struct TracingSessionObserver;

impl SessionObserver for TracingSessionObserver {
    fn on_login(&self, role: Role, identity: &Identity) {
        info!(
            role = %role,
            user_id = %identity.id,
            display_name = %identity.display_name,
            "Logged in"
        );
    }

    fn on_logout(&self) {
        info!("Logged out");
    }
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SessionEvent {
        Login(Role, String),
        Logout,
    }

    /// Records login/logout callbacks in order
    #[derive(Default)]
    pub struct RecordingSessionObserver {
        events: Mutex<Vec<SessionEvent>>,
    }

    impl RecordingSessionObserver {
        pub fn events(&self) -> Vec<SessionEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl SessionObserver for RecordingSessionObserver {
        fn on_login(&self, role: Role, identity: &Identity) {
            self.events
                .lock()
                .unwrap()
                .push(SessionEvent::Login(role, identity.id.clone()));
        }

        fn on_logout(&self) {
            self.events.lock().unwrap().push(SessionEvent::Logout);
        }
    }
}
