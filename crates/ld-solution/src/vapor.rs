//! Multi-salt solution vapor pressure and equilibrium humidity ratio.

use crate::composition::MAX_MASS_FRACTION;
use crate::density::solution_density;
use crate::error::{SolutionError, SolutionResult};
use crate::ion::Ion;
use crate::salt::Salt;
use ld_core::constants::{KELVIN_OFFSET, WATER_MOLALITY};
use ld_psychro::{humidity_ratio, humidity_ratio_from_vapor_pressure, saturation_vapor_pressure};

/// Outputs of the solution vapor-pressure model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionVapor {
    /// Vapor pressure over the solution surface (Pa).
    pub p_solution_pa: f64,
    /// Saturation vapor pressure of the ambient air (Pa, Goff-Gratch);
    /// diagnostic companion value, not used in the driving force.
    pub p_air_pa: f64,
    /// Equilibrium humidity ratio of air over the solution (kg/kg).
    pub w_solution: f64,
    /// Humidity ratio of the ambient air (kg/kg).
    pub w_air: f64,
    /// Solution density (kg/m^3) at the solution temperature.
    pub rho_solution: f64,
}

/// Vapor pressure of a multi-salt solution film.
///
/// `mass_fractions` are per-salt mass fractions of the whole solution
/// (clamped here to [0, 0.999]); `solution_mass_kg` is the mass basis for
/// the molality accounting. Air-side values are evaluated at the *air*
/// temperature, solution-side values at the *solution* temperature.
pub fn vapor_pressure(
    t_solution_c: f64,
    t_air_c: f64,
    rh_fraction: f64,
    mass_fractions: &[(Salt, f64)],
    solution_mass_kg: f64,
) -> SolutionResult<SolutionVapor> {
    if !solution_mass_kg.is_finite() || solution_mass_kg <= 0.0 {
        return Err(SolutionError::NonPhysical {
            what: "solution mass basis",
        });
    }

    let t_k = t_solution_c + KELVIN_OFFSET;

    let clamped: Vec<(Salt, f64)> = mass_fractions
        .iter()
        .map(|(salt, frac)| (*salt, frac.clamp(0.0, MAX_MASS_FRACTION)))
        .collect();
    let salt_fraction: f64 = clamped.iter().map(|(_, f)| f).sum();
    let water_fraction = 1.0 - salt_fraction;
    if water_fraction <= 0.0 {
        return Err(SolutionError::NonPhysical {
            what: "salt fractions leave no water",
        });
    }

    // Molality of each dissociated ion (mol per kg of water), accumulated
    // across salts that share an ion.
    let kg_water = water_fraction * solution_mass_kg;
    let mut molality: Vec<(Ion, f64)> = Vec::with_capacity(Ion::ALL.len());
    for (salt, frac) in &clamped {
        // 1000 g/kg basis: salt molar mass is in kg/kmol == g/mol.
        let moles_salt = (frac * solution_mass_kg * 1000.0) / salt.molar_mass();
        for (ion, coeff) in salt.ions() {
            let m_i = moles_salt * coeff / kg_water;
            match molality.iter_mut().find(|(i, _)| i == ion) {
                Some((_, m)) => *m += m_i,
                None => molality.push((*ion, m_i)),
            }
        }
    }

    let mut sum_m = 0.0;
    let mut sum_xi_m = 0.0;
    let mut sum_alpha_beta = 0.0;
    for (ion, m_i) in &molality {
        let p = ion.activity();
        sum_m += m_i;
        sum_xi_m += p.xi * m_i;
        sum_alpha_beta += p.alpha * m_i.powf(1.5) + p.beta * m_i.powi(2);
    }

    let denominator = 1.0 + sum_xi_m;
    let temp_factor = (t_k / KELVIN_OFFSET).powi(2);
    let ln_water_activity = (WATER_MOLALITY / (WATER_MOLALITY + sum_m)).ln();

    // Pure-water vapor pressure estimate, ln(Pa), polynomial in inverse
    // temperature. Not interchangeable with Goff-Gratch; the activity
    // correlation was fitted against this form.
    let ln_psat_w = 23.271 - 3879.198 / (t_k - 42.7356);

    let activity_term = sum_alpha_beta / (denominator * temp_factor);
    let reduced = (activity_term - 1.0) * ln_water_activity;
    let p_solution_pa = (ln_psat_w - reduced).exp();

    let w_solution = humidity_ratio_from_vapor_pressure(p_solution_pa)?;
    let w_air = humidity_ratio(rh_fraction, t_air_c + KELVIN_OFFSET)?;
    let p_air_pa = saturation_vapor_pressure(t_air_c + KELVIN_OFFSET);
    let rho_solution = solution_density(t_solution_c, &clamped);

    Ok(SolutionVapor {
        p_solution_pa,
        p_air_pa,
        w_solution,
        w_air,
        rho_solution,
    })
}
