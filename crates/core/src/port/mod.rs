// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod notifier;
pub mod random_source; // For deterministic testing
pub mod session_observer;
pub mod time_provider;

// Re-exports
pub use id_provider::{IdProvider, UuidProvider};
pub use notifier::{ChannelNotifier, Notifier, TracingNotifier};
pub use random_source::{RandomSource, SeededRandomSource, ThreadRandomSource};
pub use session_observer::{SessionObserver, TracingSessionObserver};
pub use time_provider::{SystemTimeProvider, TimeProvider};
