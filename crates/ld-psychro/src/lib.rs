//! ld-psychro: psychrometric primitives for moist air.
//!
//! Provides:
//! - Saturation vapor pressure correlations (Goff-Gratch and Magnus)
//! - Humidity ratio and absolute humidity
//! - Moist air density
//! - `AirState`: a validated (temperature, relative humidity) sample
//!
//! # Two saturation-pressure formulas
//!
//! The engine carries two independent low-order saturation-pressure
//! approximations and they must not be unified:
//!
//! - [`saturation_vapor_pressure`] (Goff-Gratch, Kelvin input) feeds
//!   [`humidity_ratio`] and the solution vapor-pressure diagnostics.
//! - The Magnus variants (Celsius input) feed [`absolute_humidity`]
//!   and [`moist_air_density`].
//!
//! Swapping one for the other silently shifts every downstream number.

pub mod error;
pub mod humidity;
pub mod saturation;
pub mod state;

// Re-exports for ergonomics
pub use error::{PsychroError, PsychroResult};
pub use humidity::{absolute_humidity, humidity_ratio, humidity_ratio_from_vapor_pressure};
pub use saturation::{
    magnus_vapor_pressure_hpa, magnus_vapor_pressure_pa, moist_air_density,
    saturation_vapor_pressure,
};
pub use state::AirState;
