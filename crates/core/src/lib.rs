// Clinic Queue Core - Domain Logic & Ports
// NO terminal or subscriber dependencies; the binary crate is the composition root

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
