//! Saturation vapor pressure correlations and moist-air density.
//!
//! Two independent formula families live here; see the crate docs
//! before touching either.

use ld_core::constants::{KELVIN_OFFSET, P_ATM_PA, STEAM_POINT_K, STEAM_POINT_PA};

/// Saturation vapor pressure over liquid water (Pa), Goff & Gratch (1946),
/// referenced to the steam point (373.15 K, 101324.6 Pa).
///
/// Input is an absolute temperature in Kelvin. Passing Celsius here is the
/// classic mistake with this formula set; callers convert explicitly.
///
/// Used by [`crate::humidity_ratio`] and by the solution vapor-pressure
/// model's ambient-air diagnostic.
pub fn saturation_vapor_pressure(t_kelvin: f64) -> f64 {
    let ts = STEAM_POINT_K;
    let ps = STEAM_POINT_PA;

    let log10_svp = -7.90298 * (ts / t_kelvin - 1.0)
        + 5.02808 * (ts / t_kelvin).log10()
        - 1.3816e-7 * (10.0_f64.powf(11.344 * (1.0 - t_kelvin / ts)) - 1.0)
        + 8.1328e-3 * (10.0_f64.powf(3.49149 * (1.0 - ts / t_kelvin)) - 1.0)
        + ps.log10();

    10.0_f64.powf(log10_svp)
}

/// Magnus saturation vapor pressure (hPa), 6.112 hPa / 17.67 / 243.5 fit.
///
/// Celsius input. Feeds [`crate::absolute_humidity`] only.
pub fn magnus_vapor_pressure_hpa(t_celsius: f64) -> f64 {
    6.112 * ((17.67 * t_celsius) / (t_celsius + 243.5)).exp()
}

/// Magnus saturation vapor pressure (Pa), 610.94 Pa / 17.625 / 243.04 fit.
///
/// Celsius input. Feeds [`moist_air_density`] only.
pub fn magnus_vapor_pressure_pa(t_celsius: f64) -> f64 {
    610.94 * ((17.625 * t_celsius) / (t_celsius + 243.04)).exp()
}

/// Moist air density (kg/m^3) as an ideal-gas mixture of dry air and water
/// vapor at the standard barometer.
///
/// `rh_percent` is relative humidity in percent (e.g. 50 for 50%).
pub fn moist_air_density(t_celsius: f64, rh_percent: f64) -> f64 {
    // Specific gas constants (J/(kg K))
    const R_DRY: f64 = 287.058;
    const R_VAPOR: f64 = 461.495;

    let t_k = t_celsius + KELVIN_OFFSET;
    let rh_frac = rh_percent / 100.0;

    let p_ws = magnus_vapor_pressure_pa(t_celsius);
    let p_w = rh_frac * p_ws;
    let p_dry = P_ATM_PA - p_w;

    p_dry / (R_DRY * t_k) + p_w / (R_VAPOR * t_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ld_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn goff_gratch_anchored_at_steam_point() {
        let svp = saturation_vapor_pressure(STEAM_POINT_K);
        let tol = Tolerances {
            abs: 1e-6,
            rel: 1e-9,
        };
        assert!(nearly_equal(svp, STEAM_POINT_PA, tol), "svp = {svp}");
    }

    #[test]
    fn goff_gratch_room_temperature() {
        // ~23.4 hPa at 20 C per steam tables
        let svp = saturation_vapor_pressure(293.15);
        assert!((2200.0..2450.0).contains(&svp), "svp = {svp}");
    }

    #[test]
    fn magnus_fits_disagree_slightly() {
        // The two fits are close but not the same curve.
        let a = magnus_vapor_pressure_hpa(25.0) * 100.0;
        let b = magnus_vapor_pressure_pa(25.0);
        assert!((a - b).abs() / b < 0.01);
        assert_ne!(a, b);
    }

    #[test]
    fn dry_air_density_at_15c() {
        let rho = moist_air_density(15.0, 0.0);
        assert!((rho - 1.225).abs() < 0.005, "rho = {rho}");
    }

    #[test]
    fn humid_air_is_lighter() {
        let dry = moist_air_density(30.0, 0.0);
        let humid = moist_air_density(30.0, 90.0);
        assert!(humid < dry);
    }
}
