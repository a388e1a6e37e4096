//! Humidity ratio and absolute humidity.

use crate::error::{PsychroError, PsychroResult};
use crate::saturation::{magnus_vapor_pressure_hpa, saturation_vapor_pressure};
use ld_core::constants::{KELVIN_OFFSET, P_ATM_PA};

/// Humidity ratio W (kg water / kg dry air) of moist air.
///
/// `rh_fraction` is relative humidity as a fraction in [0, 1];
/// `t_kelvin` is the dry-bulb temperature in Kelvin. Saturation pressure
/// comes from Goff-Gratch.
///
/// Errors when the vapor pressure reaches the barometric pressure
/// (the formula diverges there) or when a non-finite value appears.
pub fn humidity_ratio(rh_fraction: f64, t_kelvin: f64) -> PsychroResult<f64> {
    if !(0.0..=1.0).contains(&rh_fraction) {
        return Err(PsychroError::InvalidArg {
            what: "relative humidity fraction outside [0, 1]",
        });
    }
    let p_v = rh_fraction * saturation_vapor_pressure(t_kelvin);
    humidity_ratio_from_vapor_pressure(p_v)
}

/// Humidity ratio for a known vapor pressure (Pa) at the standard barometer.
///
/// This is the same `0.62198 p_v / (P_atm - p_v)` conversion that
/// [`humidity_ratio`] uses; the solution property model calls it directly
/// to turn a solution-surface vapor pressure into an equilibrium humidity
/// ratio.
pub fn humidity_ratio_from_vapor_pressure(p_v_pa: f64) -> PsychroResult<f64> {
    if !p_v_pa.is_finite() {
        return Err(PsychroError::NonFinite {
            what: "vapor pressure",
        });
    }
    if p_v_pa < 0.0 {
        return Err(PsychroError::NonPhysical {
            what: "negative vapor pressure",
        });
    }
    if p_v_pa >= P_ATM_PA {
        return Err(PsychroError::Saturated {
            p_v_pa,
            p_atm_pa: P_ATM_PA,
        });
    }
    Ok(0.62198 * p_v_pa / (P_ATM_PA - p_v_pa))
}

/// Absolute humidity (g/m^3) of moist air.
///
/// `rh_percent` is relative humidity in percent. Uses the Magnus
/// saturation fit, not Goff-Gratch; the crate docs describe which
/// formula family feeds which quantity.
pub fn absolute_humidity(t_celsius: f64, rh_percent: f64) -> f64 {
    let p_sat_hpa = magnus_vapor_pressure_hpa(t_celsius);
    let p_v_hpa = (rh_percent / 100.0) * p_sat_hpa;
    216.7 * p_v_hpa / (t_celsius + KELVIN_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humidity_ratio_typical_summer_day() {
        // 35 C, 20% RH: roughly 7 g water per kg dry air
        let w = humidity_ratio(0.2, 308.15).unwrap();
        assert!((0.005..0.010).contains(&w), "w = {w}");
    }

    #[test]
    fn humidity_ratio_rejects_out_of_range_rh() {
        assert!(humidity_ratio(1.5, 300.0).is_err());
        assert!(humidity_ratio(-0.1, 300.0).is_err());
    }

    #[test]
    fn humidity_ratio_errors_at_saturation() {
        // Above the boiling point the saturation pressure exceeds the
        // barometer and the conversion has no meaning.
        let err = humidity_ratio(1.0, 380.0).unwrap_err();
        assert!(matches!(err, PsychroError::Saturated { .. }));
    }

    #[test]
    fn vapor_pressure_conversion_rejects_negative() {
        assert!(humidity_ratio_from_vapor_pressure(-1.0).is_err());
        assert!(humidity_ratio_from_vapor_pressure(f64::NAN).is_err());
    }

    #[test]
    fn absolute_humidity_reference_point() {
        // 30 C, 100% RH is about 30 g/m^3
        let ah = absolute_humidity(30.0, 100.0);
        assert!((29.0..32.0).contains(&ah), "ah = {ah}");
    }

    #[test]
    fn absolute_humidity_scales_with_rh() {
        let half = absolute_humidity(25.0, 50.0);
        let full = absolute_humidity(25.0, 100.0);
        assert!((full - 2.0 * half).abs() < 1e-12);
    }
}
