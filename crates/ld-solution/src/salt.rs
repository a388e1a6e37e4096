//! Hygroscopic salt catalog.

use crate::error::SolutionError;
use crate::ion::Ion;

/// Salts tracked by the desiccant solution model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Salt {
    /// Calcium chloride (CaCl₂)
    CaCl2,
    /// Lithium chloride (LiCl)
    LiCl,
    /// Magnesium chloride (MgCl₂)
    MgCl2,
    /// Calcium nitrate (Ca(NO₃)₂)
    CaNO32,
}

impl Salt {
    pub const ALL: [Salt; 4] = [Salt::CaCl2, Salt::LiCl, Salt::MgCl2, Salt::CaNO32];

    pub fn key(&self) -> &'static str {
        match self {
            Salt::CaCl2 => "CaCl2",
            Salt::LiCl => "LiCl",
            Salt::MgCl2 => "MgCl2",
            Salt::CaNO32 => "CaNO32",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Salt::CaCl2 => "Calcium Chloride",
            Salt::LiCl => "Lithium Chloride",
            Salt::MgCl2 => "Magnesium Chloride",
            Salt::CaNO32 => "Calcium Nitrate",
        }
    }

    /// Get molar mass [kg/kmol] for this salt.
    pub fn molar_mass(&self) -> f64 {
        match self {
            Salt::CaCl2 => 110.98,
            Salt::LiCl => 42.39,
            Salt::MgCl2 => 95.3,
            Salt::CaNO32 => 164.088,
        }
    }

    /// Dissociation list: (ion, moles of ion per mole of salt).
    pub fn ions(&self) -> &'static [(Ion, f64)] {
        match self {
            Salt::CaCl2 => &[(Ion::Ca, 1.0), (Ion::Cl, 2.0)],
            Salt::LiCl => &[(Ion::Li, 1.0), (Ion::Cl, 1.0)],
            Salt::MgCl2 => &[(Ion::Mg, 1.0), (Ion::Cl, 2.0)],
            Salt::CaNO32 => &[(Ion::Ca, 1.0), (Ion::NO3, 2.0)],
        }
    }

    /// Density increment [kg/m^3 per unit mass fraction] near 20 C.
    pub fn density_increment(&self) -> f64 {
        match self {
            Salt::CaCl2 => 800.0,
            Salt::LiCl => 500.0,
            Salt::MgCl2 => 750.0,
            Salt::CaNO32 => 600.0,
        }
    }
}

impl std::str::FromStr for Salt {
    type Err = SolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CACL2" | "CALCIUM CHLORIDE" => Ok(Salt::CaCl2),
            "LICL" | "LITHIUM CHLORIDE" => Ok(Salt::LiCl),
            "MGCL2" | "MAGNESIUM CHLORIDE" => Ok(Salt::MgCl2),
            "CANO32" | "CA(NO3)2" | "CALCIUM NITRATE" => Ok(Salt::CaNO32),
            _ => Err(SolutionError::UnknownSalt {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_roundtrip() {
        for salt in Salt::ALL {
            let parsed = salt
                .key()
                .parse::<Salt>()
                .expect("canonical key should parse");
            assert_eq!(parsed, salt);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("Ca(NO3)2".parse::<Salt>().unwrap(), Salt::CaNO32);
        assert_eq!("lithium chloride".parse::<Salt>().unwrap(), Salt::LiCl);
    }

    #[test]
    fn unknown_salt_is_a_configuration_error() {
        let err = "NaCl".parse::<Salt>().unwrap_err();
        assert!(matches!(err, SolutionError::UnknownSalt { .. }));
        assert!(err.to_string().contains("NaCl"));
    }

    #[test]
    fn dissociation_counts_are_electroneutral() {
        // Divalent cations carry two monovalent anions.
        for salt in [Salt::CaCl2, Salt::MgCl2, Salt::CaNO32] {
            let anions: f64 = salt
                .ions()
                .iter()
                .filter(|(ion, _)| matches!(ion, Ion::Cl | Ion::NO3))
                .map(|(_, n)| n)
                .sum();
            assert_eq!(anions, 2.0, "{salt:?}");
        }
    }
}
