//! Error types for the absorption step solver.

use ld_psychro::PsychroError;
use ld_solution::SolutionError;
use thiserror::Error;

/// Errors encountered computing one absorption timestep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error(
        "Fixed-point iteration did not converge after {iterations} iterations \
         (residual {residual}, tolerance {tolerance})"
    )]
    ConvergenceFailed {
        iterations: usize,
        residual: f64,
        tolerance: f64,
    },

    #[error("Solution property error: {0}")]
    Solution(#[from] SolutionError),

    #[error("Psychrometric error: {0}")]
    Psychro(#[from] PsychroError),
}

pub type TransferResult<T> = Result<T, TransferError>;
