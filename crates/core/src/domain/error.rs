// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid entry state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Roster entry not found: {0}")]
    EntryNotFound(u32),
}

pub type Result<T> = std::result::Result<T, DomainError>;
