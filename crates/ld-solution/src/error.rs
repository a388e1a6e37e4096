//! Solution property errors.

use ld_psychro::PsychroError;
use thiserror::Error;

/// Result type for solution property operations.
pub type SolutionResult<T> = Result<T, SolutionError>;

/// Errors that can occur during solution property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolutionError {
    /// Salt identifier with no catalog entry.
    #[error("Unknown salt identifier: {name}")]
    UnknownSalt { name: String },

    /// Non-physical values (no water left, negative mass, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Error from the psychrometric layer.
    #[error("Psychrometric error: {0}")]
    Psychro(#[from] PsychroError),
}
