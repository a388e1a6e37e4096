//! ld-sim: hour integration and airflow selection.
//!
//! Provides:
//! - `run_hour`: minute-by-minute absorption over one simulated hour
//! - `lpm_from_cfm`: airflow to liquid-flow conversion at a target L/G
//! - `auto_select_cfm`: smallest ladder candidate meeting an absorption
//!   target (sequential and rayon-parallel variants)
//! - `simulate_hours`: independent multi-hour batch over a weather series
//!
//! The engine is a pure computation over explicit inputs: air state and
//! solution composition go in, absorbed mass and the final composition
//! come out. Nothing here owns long-lived resources.

pub mod batch;
pub mod error;
pub mod flow;
pub mod hour;
pub mod select;

// Re-exports for ergonomics
pub use batch::{HourlyOutcome, simulate_hours, sum_by_chunks};
pub use error::{SimError, SimResult};
pub use flow::{CFM_TO_M3_PER_S, lpm_from_cfm};
pub use hour::{HourOptions, HourReport, run_hour};
pub use select::{CfmSelection, SelectorConfig, auto_select_cfm, auto_select_cfm_parallel};
