// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Model operations are total and never produce one of these; errors only
/// surface at the edges (configuration, internal entry transitions).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
