//! ld-core: shared foundation for the liquid-desiccant engine.
//!
//! A thin crate: the float-comparison helpers the test suites use, the
//! canonical uom temperature type, and the physical constants the
//! correlations share. Domain behavior lives in the layer crates.

pub mod numeric;
pub mod units;

pub use numeric::{Tolerances, nearly_equal};
pub use units::{Temperature, constants};
