//! Airflow to liquid-flow conversion.

use crate::error::{SimError, SimResult};

/// Cubic feet per minute to cubic meters per second.
pub const CFM_TO_M3_PER_S: f64 = 0.000471947;

/// Liquid flow rate (LPM) matching an airflow (CFM) at a target
/// liquid-to-gas mass ratio.
///
/// Pure unit algebra: air volumetric flow to air mass flow via `rho_air`,
/// scaled by `l_by_g`, back to liquid volume via `rho_liquid`. Densities
/// must be positive; a zero liquid density is a caller error, not a NaN.
pub fn lpm_from_cfm(cfm: f64, l_by_g: f64, rho_air: f64, rho_liquid: f64) -> SimResult<f64> {
    if !cfm.is_finite() || cfm <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "airflow (CFM) must be positive",
        });
    }
    if !l_by_g.is_finite() || l_by_g <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "liquid-to-gas ratio must be positive",
        });
    }
    if !rho_air.is_finite() || rho_air <= 0.0 {
        return Err(SimError::NonPhysical {
            what: "air density must be positive",
        });
    }
    if !rho_liquid.is_finite() || rho_liquid <= 0.0 {
        return Err(SimError::NonPhysical {
            what: "liquid density must be positive",
        });
    }

    let q_air_m3_per_s = cfm * CFM_TO_M3_PER_S;
    let m_air_kg_per_s = rho_air * q_air_m3_per_s;
    let m_liquid_kg_per_s = l_by_g * m_air_kg_per_s;
    let q_liquid_m3_per_s = m_liquid_kg_per_s / rho_liquid;

    Ok(q_liquid_m3_per_s * 1000.0 * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_point() {
        // 20000 CFM of 35 C / 20% air against a 1380 kg/m^3 desiccant at
        // L/G = 1.2 lands near 562 LPM.
        let lpm = lpm_from_cfm(20000.0, 1.2, 1.1407, 1380.0).unwrap();
        assert!((lpm - 561.8).abs() < 1.0, "lpm = {lpm}");
    }

    #[test]
    fn rejects_degenerate_densities() {
        assert!(lpm_from_cfm(20000.0, 1.2, 0.0, 1380.0).is_err());
        assert!(lpm_from_cfm(20000.0, 1.2, 1.2, 0.0).is_err());
        assert!(lpm_from_cfm(20000.0, 1.2, 1.2, -1380.0).is_err());
        assert!(lpm_from_cfm(20000.0, 1.2, f64::NAN, 1380.0).is_err());
    }

    #[test]
    fn round_trips_to_cfm() {
        let (l_by_g, rho_air, rho_liquid) = (1.2, 1.14, 1380.0);
        let cfm = 23000.0;
        let lpm = lpm_from_cfm(cfm, l_by_g, rho_air, rho_liquid).unwrap();
        let back = lpm / (1000.0 * 60.0) * rho_liquid / (l_by_g * rho_air) / CFM_TO_M3_PER_S;
        assert!((back - cfm).abs() < 1e-9 * cfm);
    }
}
