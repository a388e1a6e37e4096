//! Solution composition: total mass plus per-salt masses.

use crate::error::{SolutionError, SolutionResult};
use crate::salt::Salt;

/// Per-salt mass fractions are clamped to this ceiling wherever they feed
/// a correlation; the fits are meaningless beyond it.
pub const MAX_MASS_FRACTION: f64 = 0.999;

/// A desiccant solution charge: total mass and the mass of each tracked salt.
///
/// Mass fractions are derived, never stored: absorbing water grows the
/// total mass while salt masses stay constant, so concentration falls
/// monotonically over an hour.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionComposition {
    total_mass_kg: f64,
    salt_masses: Vec<(Salt, f64)>,
}

impl SolutionComposition {
    /// Create a composition from a total mass and per-salt masses (kg).
    ///
    /// Validates that the total mass is positive and finite, salt masses are
    /// non-negative and finite, no salt appears twice, and salt mass leaves
    /// room for water.
    pub fn new(total_mass_kg: f64, salt_masses: Vec<(Salt, f64)>) -> SolutionResult<Self> {
        if !total_mass_kg.is_finite() || total_mass_kg <= 0.0 {
            return Err(SolutionError::NonPhysical {
                what: "total solution mass",
            });
        }

        let mut sum = 0.0;
        for (i, (salt, mass)) in salt_masses.iter().enumerate() {
            if !mass.is_finite() || *mass < 0.0 {
                return Err(SolutionError::NonPhysical {
                    what: "negative or non-finite salt mass",
                });
            }
            if salt_masses[..i].iter().any(|(s, _)| s == salt) {
                return Err(SolutionError::InvalidArg {
                    what: "duplicate salt in composition",
                });
            }
            sum += mass;
        }

        if sum >= total_mass_kg {
            return Err(SolutionError::NonPhysical {
                what: "salt mass leaves no water in solution",
            });
        }

        Ok(Self {
            total_mass_kg,
            salt_masses,
        })
    }

    /// Create a composition from per-salt mass fractions of the total.
    pub fn from_mass_fractions(
        total_mass_kg: f64,
        fractions: &[(Salt, f64)],
    ) -> SolutionResult<Self> {
        let masses = fractions
            .iter()
            .map(|(salt, frac)| (*salt, frac * total_mass_kg))
            .collect();
        Self::new(total_mass_kg, masses)
    }

    pub fn total_mass_kg(&self) -> f64 {
        self.total_mass_kg
    }

    /// Mass of one salt (kg); 0 if the salt is not present.
    pub fn salt_mass_kg(&self, salt: Salt) -> f64 {
        self.salt_masses
            .iter()
            .find(|(s, _)| *s == salt)
            .map(|(_, m)| *m)
            .unwrap_or(0.0)
    }

    /// Combined mass of all salts (kg). Conserved across absorption.
    pub fn total_salt_mass_kg(&self) -> f64 {
        self.salt_masses.iter().map(|(_, m)| m).sum()
    }

    /// Total salt mass fraction x = (salt mass) / (solution mass).
    pub fn total_salt_fraction(&self) -> f64 {
        self.total_salt_mass_kg() / self.total_mass_kg
    }

    /// Per-salt mass fractions, each clamped to [0, MAX_MASS_FRACTION].
    pub fn mass_fractions(&self) -> Vec<(Salt, f64)> {
        self.salt_masses
            .iter()
            .map(|(salt, mass)| {
                (
                    *salt,
                    (mass / self.total_mass_kg).clamp(0.0, MAX_MASS_FRACTION),
                )
            })
            .collect()
    }

    /// Relative proportion of each salt within the total salt mass.
    ///
    /// These ratios stay fixed while water is absorbed; the step solver uses
    /// them to split a perturbed total concentration back into per-salt
    /// fractions.
    pub fn salt_ratios(&self) -> SolutionResult<Vec<(Salt, f64)>> {
        let total = self.total_salt_mass_kg();
        if total <= 0.0 {
            return Err(SolutionError::NonPhysical {
                what: "composition holds no salt",
            });
        }
        Ok(self
            .salt_masses
            .iter()
            .map(|(salt, mass)| (*salt, mass / total))
            .collect())
    }

    /// Mass fraction of water (remainder after all salts).
    pub fn water_fraction(&self) -> f64 {
        1.0 - self.total_salt_fraction()
    }

    /// Add absorbed water: total mass grows, salt masses are untouched.
    pub fn absorb_water(&mut self, water_kg: f64) {
        debug_assert!(water_kg >= 0.0);
        self.total_mass_kg += water_kg;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Salt, f64)> + '_ {
        self.salt_masses.iter().copied()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn absorbing_water_never_raises_concentration(
            frac in 0.05_f64..0.6,
            water in 0.0_f64..100.0,
        ) {
            let mut comp =
                SolutionComposition::from_mass_fractions(500.0, &[(Salt::CaCl2, frac)]).unwrap();
            let x0 = comp.total_salt_fraction();
            comp.absorb_water(water);
            prop_assert!(comp.total_salt_fraction() <= x0);
            prop_assert!(comp.water_fraction() >= 1.0 - x0);
        }
    }
}
