//! Multi-hour batch runs over a weather series.

use crate::error::{SimError, SimResult};
use crate::hour::HourOptions;
use crate::select::{SelectorConfig, auto_select_cfm};
use ld_psychro::AirState;
use ld_solution::SolutionComposition;
use ld_transfer::ContactorGeometry;
use rayon::prelude::*;
use tracing::debug;

/// One hour of a batch run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HourlyOutcome {
    /// Water absorbed during this hour (kg).
    pub absorbed_kg: f64,
    /// Airflow selected for this hour (CFM).
    pub cfm: u32,
    /// Absolute humidity of the hour's air (g/m^3), for reporting.
    pub absolute_humidity_g_m3: f64,
}

/// Auto-select CFM and integrate one hour for each air sample.
///
/// Every hour starts from a fresh copy of `initial`: the plant model is a
/// recharged solution per hour, not a charge depleting across the series.
/// Hours are mutually independent and run across the rayon pool; output
/// order matches input order.
pub fn simulate_hours(
    series: &[AirState],
    initial: &SolutionComposition,
    geometry: &ContactorGeometry,
    hour_opts: &HourOptions,
    selector: &SelectorConfig,
) -> SimResult<Vec<HourlyOutcome>> {
    series
        .par_iter()
        .enumerate()
        .map(|(hour, air)| {
            let selection = auto_select_cfm(air, initial, geometry, hour_opts, selector)?;
            debug!(
                hour,
                cfm = selection.cfm,
                absorbed = selection.report.total_absorbed_kg,
                "batch hour complete"
            );
            Ok(HourlyOutcome {
                absorbed_kg: selection.report.total_absorbed_kg,
                cfm: selection.cfm,
                absolute_humidity_g_m3: air.absolute_humidity(),
            })
        })
        .collect()
}

/// Sum a per-hour series into fixed-size chunks (e.g. hours into months).
///
/// A trailing partial chunk is summed as-is; a zero chunk size is an
/// invalid argument, not a panic.
pub fn sum_by_chunks(values: &[f64], chunk_size: usize) -> SimResult<Vec<f64>> {
    if chunk_size == 0 {
        return Err(SimError::InvalidArg {
            what: "chunk size must be positive",
        });
    }
    Ok(values
        .chunks(chunk_size)
        .map(|chunk| chunk.iter().sum())
        .collect())
}
