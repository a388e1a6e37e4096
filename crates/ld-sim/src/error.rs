//! Error types for simulation runs.

use ld_psychro::PsychroError;
use ld_solution::SolutionError;
use ld_transfer::TransferError;
use thiserror::Error;

/// Errors encountered while integrating hours or selecting airflow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    #[error("Solution property error: {0}")]
    Solution(#[from] SolutionError),

    #[error("Psychrometric error: {0}")]
    Psychro(#[from] PsychroError),
}

pub type SimResult<T> = Result<T, SimError>;
