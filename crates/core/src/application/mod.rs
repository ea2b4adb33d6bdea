// Application Layer - Use Cases and Services

pub mod clinic;
pub mod config;
pub mod constants;
pub mod patient;
pub mod roster;
pub mod session;

// Re-exports
pub use clinic::{ClinicApp, ClinicDeps, Dashboard};
pub use config::SimulationConfig;
pub use patient::PatientQueueService;
pub use roster::RosterBoard;
pub use session::{LoginRequest, SessionHolder};
