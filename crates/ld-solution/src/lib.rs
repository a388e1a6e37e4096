//! ld-solution: multi-salt hygroscopic solution properties.
//!
//! Provides:
//! - Salt and ion catalogs (dissociation, molar masses, activity parameters)
//! - `SolutionComposition`: total mass plus per-salt masses
//! - Solution density (Kell pure water + per-salt increments)
//! - Multi-salt vapor pressure / equilibrium humidity ratio
//! - Finite-difference equilibrium slope estimator
//!
//! The vapor-pressure correlation is the ion-interaction model of the
//! reference contactor: per-ion molality accumulated across salts, an
//! activity term from the (xi, alpha, beta) parameters, and a water
//! activity term on a 55.51 mol/kg basis.

pub mod composition;
pub mod density;
pub mod error;
pub mod ion;
pub mod salt;
pub mod slope;
pub mod vapor;

// Re-exports for ergonomics
pub use composition::SolutionComposition;
pub use density::{pure_water_density, solution_density};
pub use error::{SolutionError, SolutionResult};
pub use ion::{Ion, IonActivity};
pub use salt::Salt;
pub use slope::equilibrium_slope;
pub use vapor::{SolutionVapor, vapor_pressure};
