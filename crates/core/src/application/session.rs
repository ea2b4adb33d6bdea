// Session Holder - current identity for the process lifetime

use crate::domain::{Identity, Role};
use crate::port::{IdProvider, SessionObserver};
use std::sync::Arc;
use tracing::debug;

/// Login form contents
///
/// Nothing here is validated; the password is accepted and discarded.
#[derive(Clone)]
pub struct LoginRequest {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl LoginRequest {
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            role,
            email: email.into(),
            password: String::new(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("role", &self.role)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Holds the logged-in identity
pub struct SessionHolder {
    identity: Option<Identity>,
    id_provider: Arc<dyn IdProvider>,
    observer: Arc<dyn SessionObserver>,
}

impl SessionHolder {
    pub fn new(id_provider: Arc<dyn IdProvider>, observer: Arc<dyn SessionObserver>) -> Self {
        Self {
            identity: None,
            id_provider,
            observer,
        }
    }

    /// Fabricate an identity and make it current; always succeeds
    ///
    /// An existing session is replaced.
    pub fn login(&mut self, req: LoginRequest) -> &Identity {
        let display_name = Identity::display_name_for(&req.email, req.name.as_deref());
        let identity = Identity::new(
            self.id_provider.generate_id(),
            req.email,
            display_name,
            req.role,
        );

        if let Some(previous) = &self.identity {
            debug!(user_id = %previous.id, "Replacing active session");
        }

        self.observer.on_login(req.role, &identity);
        self.identity.insert(identity)
    }

    /// Clear the identity, returning it; no-op when logged out
    pub fn logout(&mut self) -> Option<Identity> {
        let identity = self.identity.take()?;
        self.observer.on_logout();
        Some(identity)
    }

    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }
}
