//! Air state sample supplied by weather data.

use crate::error::{PsychroError, PsychroResult};
use crate::humidity::{absolute_humidity, humidity_ratio};
use crate::saturation::moist_air_density;
use ld_core::units::Temperature;
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

/// One hourly (dry-bulb temperature, relative humidity) sample.
///
/// Immutable once built; the integrator reads the same state for a whole
/// simulated hour. Relative humidity is stored as a fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    temperature: Temperature,
    relative_humidity: f64,
}

impl AirState {
    pub fn new(temperature: Temperature, relative_humidity: f64) -> PsychroResult<Self> {
        if !relative_humidity.is_finite() || !(0.0..=1.0).contains(&relative_humidity) {
            return Err(PsychroError::InvalidArg {
                what: "relative humidity fraction outside [0, 1]",
            });
        }
        let t_k = temperature.get::<kelvin>();
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(PsychroError::NonPhysical {
                what: "absolute temperature",
            });
        }
        Ok(Self {
            temperature,
            relative_humidity,
        })
    }

    /// Convenience constructor from a Celsius dry-bulb reading.
    pub fn from_celsius(t_celsius: f64, relative_humidity: f64) -> PsychroResult<Self> {
        if !t_celsius.is_finite() {
            return Err(PsychroError::NonFinite {
                what: "dry-bulb temperature",
            });
        }
        Self::new(
            Temperature::new::<degree_celsius>(t_celsius),
            relative_humidity,
        )
    }

    pub fn celsius(&self) -> f64 {
        self.temperature.get::<degree_celsius>()
    }

    pub fn kelvin(&self) -> f64 {
        self.temperature.get::<kelvin>()
    }

    /// Relative humidity as a fraction in [0, 1].
    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }

    pub fn relative_humidity_percent(&self) -> f64 {
        self.relative_humidity * 100.0
    }

    /// Humidity ratio of this air (kg water / kg dry air), Goff-Gratch based.
    pub fn humidity_ratio(&self) -> PsychroResult<f64> {
        humidity_ratio(self.relative_humidity, self.kelvin())
    }

    /// Absolute humidity (g/m^3), Magnus based.
    pub fn absolute_humidity(&self) -> f64 {
        absolute_humidity(self.celsius(), self.relative_humidity_percent())
    }

    /// Moist air density (kg/m^3), Magnus based.
    pub fn density(&self) -> f64 {
        moist_air_density(self.celsius(), self.relative_humidity_percent())
    }
}
