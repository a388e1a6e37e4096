//! Solution density: Kell pure water plus linear salt increments.

use crate::salt::Salt;

/// Pure water density (kg/m^3) via Kell's 1975 correlation.
pub fn pure_water_density(t_celsius: f64) -> f64 {
    1000.0
        * (1.0
            - ((t_celsius + 288.9414) / (508_929.2 * (t_celsius + 68.12963)))
                * (t_celsius - 3.9863).powi(2))
}

/// Density of a multi-salt solution (kg/m^3).
///
/// Each salt adds a linear increment per unit mass fraction (fitted near
/// 20 C), corrected by a simple linear temperature factor. With all-zero
/// fractions this returns the Kell pure-water value exactly.
pub fn solution_density(t_celsius: f64, mass_fractions: &[(Salt, f64)]) -> f64 {
    let rho_w = pure_water_density(t_celsius);

    let temp_factor = 1.0 - 0.00025 * (t_celsius - 20.0);

    let delta_rho: f64 = mass_fractions
        .iter()
        .map(|(salt, frac)| salt.density_increment() * frac)
        .sum();

    rho_w + delta_rho * temp_factor
}
