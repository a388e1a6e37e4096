//! Finite-difference slope of the equilibrium curve.

use crate::error::SolutionResult;
use crate::salt::Salt;
use crate::vapor::vapor_pressure;

/// Perturbation step for the central difference.
const DELTA: f64 = 0.001;

/// Slope dy/dx of the equilibrium humidity (as mole-fraction-like
/// y = w/(1+w)) with respect to total salt mass fraction `x_total`.
///
/// `salt_ratios` splits a total concentration into per-salt fractions
/// (see [`crate::SolutionComposition::salt_ratios`]).
///
/// Sign convention: the symmetric difference is negated, so the slope is
/// positive when the equilibrium humidity falls with rising concentration.
/// The overall transfer coefficient `1/(1/k_a + slope/k_s)` expects that
/// orientation; flipping the sign here flips the driving force downstream.
pub fn equilibrium_slope(
    x_total: f64,
    t_solution_c: f64,
    t_air_c: f64,
    rh_fraction: f64,
    salt_ratios: &[(Salt, f64)],
    solution_mass_kg: f64,
) -> SolutionResult<f64> {
    let x_left = (x_total - DELTA).max(0.0);
    let x_right = (x_total + DELTA).max(0.0);

    let fractions_at = |x: f64| -> Vec<(Salt, f64)> {
        salt_ratios
            .iter()
            .map(|(salt, ratio)| (*salt, x * ratio))
            .collect()
    };

    let w_left = vapor_pressure(
        t_solution_c,
        t_air_c,
        rh_fraction,
        &fractions_at(x_left),
        solution_mass_kg,
    )?
    .w_solution;
    let w_right = vapor_pressure(
        t_solution_c,
        t_air_c,
        rh_fraction,
        &fractions_at(x_right),
        solution_mass_kg,
    )?
    .w_solution;

    let y_left = w_left / (1.0 + w_left);
    let y_right = w_right / (1.0 + w_right);

    Ok((y_right - y_left) / (-2.0 * DELTA))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_ratios() -> Vec<(Salt, f64)> {
        // 0.4 / 0.0 / 0.04 / 0.12 loading normalized to the salt total
        vec![
            (Salt::CaCl2, 0.4 / 0.56),
            (Salt::LiCl, 0.0),
            (Salt::MgCl2, 0.04 / 0.56),
            (Salt::CaNO32, 0.12 / 0.56),
        ]
    }

    #[test]
    fn slope_is_positive_for_a_desiccant() {
        // Equilibrium humidity falls as concentration rises, and the sign
        // convention reports that as a positive slope.
        let slope =
            equilibrium_slope(0.56, 37.0, 35.0, 0.2, &reference_ratios(), 500.0).unwrap();
        assert!(slope > 0.0, "slope = {slope}");
        assert!(slope < 1.0, "slope = {slope}");
    }

    #[test]
    fn clamps_below_zero_concentration() {
        // Near x = 0 the left sample clamps at 0; still finite.
        let slope =
            equilibrium_slope(0.0005, 30.0, 30.0, 0.5, &reference_ratios(), 500.0).unwrap();
        assert!(slope.is_finite());
    }

    #[test]
    fn slope_matches_coarse_secant() {
        // The central difference should agree with a coarse secant through
        // the same curve to within a few percent.
        let ratios = reference_ratios();
        let slope = equilibrium_slope(0.4, 32.0, 30.0, 0.4, &ratios, 500.0).unwrap();

        let w_at = |x: f64| {
            let fr: Vec<_> = ratios.iter().map(|(s, r)| (*s, x * r)).collect();
            let w = vapor_pressure(32.0, 30.0, 0.4, &fr, 500.0)
                .unwrap()
                .w_solution;
            w / (1.0 + w)
        };
        let secant = (w_at(0.41) - w_at(0.39)) / (-2.0 * 0.01);
        assert!((slope - secant).abs() / secant.abs() < 0.05);
    }
}
