//! Psychrometric property errors.

use thiserror::Error;

/// Result type for psychrometric operations.
pub type PsychroResult<T> = Result<T, PsychroError>;

/// Errors that can occur during psychrometric property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// Vapor pressure at or above the fixed barometric pressure; the
    /// humidity-ratio formula diverges there.
    #[error("Air is saturated: vapor pressure {p_v_pa} Pa at barometer {p_atm_pa} Pa")]
    Saturated { p_v_pa: f64, p_atm_pa: f64 },

    /// Non-physical values (negative humidity, temperature below 0 K, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A correlation produced a non-finite value.
    #[error("Non-finite result for {what}")]
    NonFinite { what: &'static str },
}
