//! Minute-by-minute hour integration.

use crate::error::{SimError, SimResult};
use ld_psychro::AirState;
use ld_solution::SolutionComposition;
use ld_transfer::{ContactorGeometry, FixedPointOptions, absorption_step};
use tracing::trace;

/// Options for one simulated hour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourOptions {
    /// Number of one-minute steps to integrate.
    pub duration_minutes: u32,
    /// Fixed solution-over-air temperature offset (C); a modeling
    /// simplification standing in for an energy balance.
    pub solution_temp_offset_c: f64,
    /// Fixed-point controls passed to every step.
    pub fixed_point: FixedPointOptions,
}

impl Default for HourOptions {
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            solution_temp_offset_c: 2.0,
            fixed_point: FixedPointOptions::default(),
        }
    }
}

/// Result of one integrated hour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HourReport {
    /// Total water absorbed over the hour (kg).
    pub total_absorbed_kg: f64,
    /// Per-minute absorbed masses (kg), each already clamped to >= 0.
    pub minutes: Vec<f64>,
    /// Solution state after the final minute.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub final_composition: SolutionComposition,
}

/// Integrate one hour of absorption at fixed airflow and liquid flow.
///
/// The air state is read-only for the whole hour; the solution gains the
/// absorbed water after every minute, so its concentration decays
/// monotonically. Any step error aborts the hour; a bad minute is never
/// skipped.
pub fn run_hour(
    air: &AirState,
    cfm: f64,
    lpm: f64,
    initial: SolutionComposition,
    geometry: &ContactorGeometry,
    opts: &HourOptions,
) -> SimResult<HourReport> {
    if opts.duration_minutes == 0 {
        return Err(SimError::InvalidArg {
            what: "duration_minutes must be positive",
        });
    }

    let t_solution_c = air.celsius() + opts.solution_temp_offset_c;

    let mut composition = initial;
    let mut minutes = Vec::with_capacity(opts.duration_minutes as usize);
    let mut total = 0.0;

    for minute in 0..opts.duration_minutes {
        let absorbed = absorption_step(
            air,
            t_solution_c,
            &composition,
            cfm,
            lpm,
            geometry,
            &opts.fixed_point,
        )?;

        composition.absorb_water(absorbed);
        total += absorbed;
        minutes.push(absorbed);
        trace!(minute, absorbed, total, "hour integration step");
    }

    Ok(HourReport {
        total_absorbed_kg: total,
        minutes,
        final_composition: composition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ld_solution::Salt;

    fn charge() -> SolutionComposition {
        SolutionComposition::from_mass_fractions(
            500.0,
            &[
                (Salt::CaCl2, 0.4),
                (Salt::MgCl2, 0.04),
                (Salt::CaNO32, 0.12),
            ],
        )
        .unwrap()
    }

    #[test]
    fn mass_balance_closes() {
        let air = AirState::from_celsius(40.0, 0.6).unwrap();
        let report = run_hour(
            &air,
            20000.0,
            560.0,
            charge(),
            &ContactorGeometry::default(),
            &HourOptions::default(),
        )
        .unwrap();

        assert_eq!(report.minutes.len(), 60);
        let sum: f64 = report.minutes.iter().sum();
        assert!((sum - report.total_absorbed_kg).abs() < 1e-9);
        assert!(
            (report.final_composition.total_mass_kg() - (500.0 + report.total_absorbed_kg)).abs()
                < 1e-9
        );
        // Salt is conserved
        assert!((report.final_composition.total_salt_mass_kg() - 280.0).abs() < 1e-9);
    }

    #[test]
    fn concentration_decays_monotonically() {
        let air = AirState::from_celsius(40.0, 0.6).unwrap();
        let report = run_hour(
            &air,
            30000.0,
            840.0,
            charge(),
            &ContactorGeometry::default(),
            &HourOptions::default(),
        )
        .unwrap();
        assert!(report.total_absorbed_kg > 0.0);
        assert!(report.final_composition.total_salt_fraction() < 0.56);
    }

    #[test]
    fn dry_hour_absorbs_nothing() {
        let air = AirState::from_celsius(20.0, 0.1).unwrap();
        let report = run_hour(
            &air,
            20000.0,
            560.0,
            charge(),
            &ContactorGeometry::default(),
            &HourOptions::default(),
        )
        .unwrap();
        assert_eq!(report.total_absorbed_kg, 0.0);
        assert_eq!(report.final_composition.total_mass_kg(), 500.0);
    }

    #[test]
    fn shorter_duration_is_honored() {
        let air = AirState::from_celsius(35.0, 0.5).unwrap();
        let opts = HourOptions {
            duration_minutes: 5,
            ..Default::default()
        };
        let report = run_hour(
            &air,
            20000.0,
            560.0,
            charge(),
            &ContactorGeometry::default(),
            &opts,
        )
        .unwrap();
        assert_eq!(report.minutes.len(), 5);
    }

    #[test]
    fn zero_duration_is_invalid() {
        let air = AirState::from_celsius(35.0, 0.5).unwrap();
        let opts = HourOptions {
            duration_minutes: 0,
            ..Default::default()
        };
        let err = run_hour(
            &air,
            20000.0,
            560.0,
            charge(),
            &ContactorGeometry::default(),
            &opts,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }

    #[test]
    fn bad_flow_aborts_the_hour() {
        let air = AirState::from_celsius(35.0, 0.5).unwrap();
        let err = run_hour(
            &air,
            -1.0,
            560.0,
            charge(),
            &ContactorGeometry::default(),
            &HourOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Transfer(_)));
    }
}
