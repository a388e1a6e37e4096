//! Contactor geometry and liquid-film constants.

use crate::error::{TransferError, TransferResult};

/// Fixed geometry and film properties of the packed contactor.
///
/// Process-wide constants for one physical unit; the defaults describe the
/// reference two-sided rack. Alternative geometries are a configuration
/// change, not a code change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactorGeometry {
    /// Number of wetted sides per panel.
    pub sides: f64,
    /// Width of one panel side (m).
    pub panel_width_m: f64,
    /// Contactor height (m); sets the air cross-section.
    pub height_m: f64,
    /// Contactor length (m); sets the solution cross-section.
    pub length_m: f64,
    /// Packing specific surface area (m^2/m^3).
    pub specific_area_m2_per_m3: f64,
    /// Number of racks in parallel.
    pub racks: f64,
    /// Solution dynamic viscosity (Pa s).
    pub solution_viscosity_pa_s: f64,
    /// Solution surface tension (N/m).
    pub solution_surface_tension: f64,
    /// Critical surface tension of the packing material (N/m).
    pub critical_surface_tension: f64,
    /// Design-point air density used for the air-side mass flux (kg/m^3).
    pub design_air_density_kg_per_m3: f64,
}

impl Default for ContactorGeometry {
    fn default() -> Self {
        Self {
            sides: 2.0,
            panel_width_m: 0.3175,
            height_m: 2.0,
            length_m: 2.0,
            specific_area_m2_per_m3: 300.0,
            racks: 1.0,
            solution_viscosity_pa_s: 0.009,
            solution_surface_tension: 0.072,
            critical_surface_tension: 0.033,
            design_air_density_kg_per_m3: 1.164,
        }
    }
}

impl ContactorGeometry {
    /// Total wetted width (m).
    pub fn wetted_width_m(&self) -> f64 {
        self.sides * self.panel_width_m
    }

    /// Air-side cross section (m^2).
    pub fn air_cross_section_m2(&self) -> f64 {
        self.height_m * self.wetted_width_m()
    }

    /// Solution-side cross section (m^2).
    pub fn solution_cross_section_m2(&self) -> f64 {
        self.length_m * self.wetted_width_m()
    }

    /// Total packing surface area of one rack (m^2).
    pub fn packing_area_m2(&self) -> f64 {
        self.specific_area_m2_per_m3 * self.length_m * self.air_cross_section_m2()
    }

    /// Nominal packing size (m), the reciprocal of the packing area.
    pub fn nominal_packing_size_m(&self) -> f64 {
        1.0 / self.packing_area_m2()
    }

    /// Reject geometries the correlations cannot digest.
    pub fn validate(&self) -> TransferResult<()> {
        let positive = [
            (self.sides, "sides"),
            (self.panel_width_m, "panel width"),
            (self.height_m, "height"),
            (self.length_m, "length"),
            (self.specific_area_m2_per_m3, "specific surface area"),
            (self.racks, "rack count"),
            (self.solution_viscosity_pa_s, "solution viscosity"),
            (self.solution_surface_tension, "solution surface tension"),
            (self.critical_surface_tension, "critical surface tension"),
            (self.design_air_density_kg_per_m3, "design air density"),
        ];
        for (value, what) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TransferError::NonPhysical { what });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_geometry_cross_sections() {
        let g = ContactorGeometry::default();
        assert!((g.air_cross_section_m2() - 1.27).abs() < 1e-12);
        assert!((g.solution_cross_section_m2() - 1.27).abs() < 1e-12);
        assert!((g.packing_area_m2() - 762.0).abs() < 1e-9);
        g.validate().unwrap();
    }

    #[test]
    fn validate_catches_zeroed_field() {
        let g = ContactorGeometry {
            length_m: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            g.validate(),
            Err(TransferError::NonPhysical { .. })
        ));
    }
}
