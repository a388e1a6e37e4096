//! Canonical temperature type and the physical constants every
//! correlation shares.

use uom::si::f64::ThermodynamicTemperature;

/// Dry-bulb and solution temperatures at API boundaries. Correlation
/// internals work in raw f64 Kelvin or Celsius as each formula expects.
pub type Temperature = ThermodynamicTemperature;

pub mod constants {
    /// Standard atmospheric pressure (Pa), the fixed barometer of every
    /// humidity-ratio conversion in the engine.
    pub const P_ATM_PA: f64 = 101_325.0;

    /// Steam-point temperature anchoring the Goff-Gratch correlation (K).
    pub const STEAM_POINT_K: f64 = 373.15;

    /// Vapor pressure at the steam point used by Goff-Gratch (Pa).
    pub const STEAM_POINT_PA: f64 = 101_324.6;

    /// Celsius/Kelvin offset.
    pub const KELVIN_OFFSET: f64 = 273.15;

    /// Gravitational acceleration used by the Froude number in the Onda
    /// correlation (m/s^2). The contactor correlations were fitted with
    /// 9.81, not standard g0.
    pub const G_MPS2: f64 = 9.81;

    /// Molar mass of water (kg/kmol).
    pub const M_WATER_KG_PER_KMOL: f64 = 18.02;

    /// Moles of water per kilogram of water, the 55.51 mol/kg basis of
    /// the water-activity term.
    pub const WATER_MOLALITY: f64 = 55.51;
}
