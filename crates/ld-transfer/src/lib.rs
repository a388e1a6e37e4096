//! ld-transfer: single-timestep absorption mass transfer.
//!
//! Provides:
//! - `ContactorGeometry`: packed-contactor constants as configuration
//! - Mass-transfer coefficient and Onda effective-area correlations
//! - `absorption_step`: the bounded fixed-point solve for one timestep

pub mod error;
pub mod geometry;
pub mod step;

pub use error::{TransferError, TransferResult};
pub use geometry::ContactorGeometry;
pub use step::{FixedPointOptions, absorption_step};
