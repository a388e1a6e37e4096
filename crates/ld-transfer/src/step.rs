//! One-timestep absorption solve.

use crate::error::{TransferError, TransferResult};
use crate::geometry::ContactorGeometry;
use ld_core::constants::{G_MPS2, M_WATER_KG_PER_KMOL};
use ld_psychro::AirState;
use ld_solution::{SolutionComposition, equilibrium_slope, solution_density, vapor_pressure};
use tracing::{debug, trace};

/// Controls for the outlet-concentration fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointOptions {
    /// Convergence tolerance on successive outlet-concentration estimates.
    pub tolerance: f64,
    /// Iteration cap; exceeding it is a hard error, not a warning.
    pub max_iterations: usize,
}

impl Default for FixedPointOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-2,
            max_iterations: 100,
        }
    }
}

/// Water mass absorbed from the airflow in one timestep (kg).
///
/// Couples the outlet concentration to the absorption rate: each pass
/// evaluates the equilibrium slope and film humidity at the average of
/// inlet and current outlet concentration, combines the film coefficients
/// into an overall `ko_a = 1/(1/k_a + slope/k_s)`, and updates the outlet
/// by mass balance until successive estimates agree.
///
/// Negative transfer (film more humid than the inlet air) is clamped to
/// zero; this model does not represent desorption.
pub fn absorption_step(
    air: &AirState,
    t_solution_c: f64,
    composition: &SolutionComposition,
    cfm: f64,
    lpm: f64,
    geometry: &ContactorGeometry,
    opts: &FixedPointOptions,
) -> TransferResult<f64> {
    geometry.validate()?;
    if !cfm.is_finite() || cfm <= 0.0 {
        return Err(TransferError::InvalidArg {
            what: "airflow (CFM) must be positive",
        });
    }
    if !lpm.is_finite() || lpm <= 0.0 {
        return Err(TransferError::InvalidArg {
            what: "liquid flow (LPM) must be positive",
        });
    }
    if opts.max_iterations == 0 {
        return Err(TransferError::InvalidArg {
            what: "max_iterations must be positive",
        });
    }

    let t_air_c = air.celsius();
    let rh = air.relative_humidity();
    let mass_kg = composition.total_mass_kg();
    let x_inlet = composition.total_salt_fraction();
    let ratios = composition.salt_ratios()?;

    let rho_solution = solution_density(t_solution_c, &composition.mass_fractions());
    if !rho_solution.is_finite() || rho_solution <= 0.0 {
        return Err(TransferError::NonPhysical {
            what: "solution density",
        });
    }

    // Air-side and liquid-side mass fluxes (kg/(m^2 s))
    let m_air = cfm * 0.02832 / 60.0 * geometry.design_air_density_kg_per_m3;
    let g_air = m_air / (geometry.air_cross_section_m2() * geometry.racks);

    let m_liquid_in = rho_solution * lpm / (1000.0 * 60.0);
    let g_liquid = m_liquid_in / (geometry.solution_cross_section_m2() * geometry.racks);

    // Empirical film coefficients, whole-solution correlation
    let area = geometry.specific_area_m2_per_m3;
    let k_s = 0.042
        * g_liquid.powf(0.63)
        * (-0.00115 * t_solution_c).exp()
        * (0.0064 * x_inlet).exp()
        * g_air.powf(0.074)
        * M_WATER_KG_PER_KMOL
        / area;
    let k_a = 0.142
        * g_liquid.powf(0.2)
        * (0.00088 * t_air_c).exp()
        * g_air.powf(0.71)
        * M_WATER_KG_PER_KMOL
        / area;

    // Onda effective interfacial area
    let d_p = geometry.nominal_packing_size_m();
    let v_liquid = g_liquid / rho_solution;
    let reynolds = rho_solution * v_liquid * d_p / geometry.solution_viscosity_pa_s;
    let froude = v_liquid / (G_MPS2 * d_p).sqrt();
    let weber = rho_solution * d_p * v_liquid.powi(2) / geometry.solution_surface_tension;
    let sigma_ratio = geometry.critical_surface_tension / geometry.solution_surface_tension;
    let a_effective = geometry.racks
        * geometry.packing_area_m2()
        * (1.0
            - (-1.45
                * sigma_ratio.powf(0.75)
                * reynolds.powf(0.1)
                * froude.powf(-0.05)
                * weber.powf(0.2))
            .exp());

    // Inlet driving potential
    let w_air = air.humidity_ratio()?;
    let y_inlet = w_air / (1.0 + w_air);

    let mut x_outlet = x_inlet;
    let mut m_v = 0.0;
    let mut residual = f64::INFINITY;

    for iteration in 0..opts.max_iterations {
        let x_avg = (x_inlet + x_outlet) / 2.0;

        let slope = equilibrium_slope(x_avg, t_solution_c, t_air_c, rh, &ratios, mass_kg)?;
        let ko_a = 1.0 / (1.0 / k_a + slope / k_s);

        let fractions: Vec<_> = ratios.iter().map(|(s, r)| (*s, x_avg * r)).collect();
        let film = vapor_pressure(t_solution_c, t_air_c, rh, &fractions, mass_kg)?;

        m_v = ko_a * a_effective * (y_inlet - film.w_solution);

        let m_liquid_out = m_liquid_in + m_v;
        let x_new = x_inlet * m_liquid_in / m_liquid_out;

        residual = (x_new - x_outlet).abs();
        x_outlet = x_new;
        trace!(iteration, residual, m_v, "outlet concentration update");

        if residual <= opts.tolerance {
            debug!(
                iterations = iteration + 1,
                m_v, x_outlet, "absorption step converged"
            );
            return Ok(m_v.max(0.0));
        }
    }

    Err(TransferError::ConvergenceFailed {
        iterations: opts.max_iterations,
        residual,
        tolerance: opts.tolerance,
    })
}
