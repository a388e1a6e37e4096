//! Dissociated ion species and their activity parameters.

/// Ions produced by the tracked salts in aqueous solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ion {
    /// Lithium (Li⁺)
    Li,
    /// Calcium (Ca²⁺)
    Ca,
    /// Magnesium (Mg²⁺)
    Mg,
    /// Chloride (Cl⁻)
    Cl,
    /// Nitrate (NO₃⁻)
    NO3,
}

/// Empirical activity coefficients (xi, alpha, beta) for one ion in the
/// vapor-pressure correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonActivity {
    pub xi: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl Ion {
    pub const ALL: [Ion; 5] = [Ion::Li, Ion::Ca, Ion::Mg, Ion::Cl, Ion::NO3];

    pub fn key(&self) -> &'static str {
        match self {
            Ion::Li => "Li",
            Ion::Ca => "Ca",
            Ion::Mg => "Mg",
            Ion::Cl => "Cl",
            Ion::NO3 => "NO3",
        }
    }

    /// Activity parameters fitted for the multi-salt correlation.
    ///
    /// Every ion a tracked salt dissociates into has an entry here; the
    /// exhaustive match keeps the salt and ion catalogs in lockstep.
    pub fn activity(&self) -> IonActivity {
        match self {
            Ion::Li => IonActivity {
                xi: 181.9875,
                alpha: -0.3409,
                beta: 0.0301,
            },
            Ion::Ca => IonActivity {
                xi: 363.7876,
                alpha: -0.6849,
                beta: 0.1039,
            },
            Ion::Mg => IonActivity {
                xi: 363.6704,
                alpha: -0.6195,
                beta: 0.1039,
            },
            Ion::Cl => IonActivity {
                xi: -181.8698,
                alpha: 0.0639,
                beta: 0.0003,
            },
            Ion::NO3 => IonActivity {
                xi: -181.6861,
                alpha: 0.1082,
                beta: -0.0174,
            },
        }
    }
}
