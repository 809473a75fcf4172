//! Physical constants for magnetostatics.
//!
//! Values follow CODATA recommended values (2018 set, post-2019 SI
//! redefinition); see the NIST Reference on Constants, Units, and
//! Uncertainty: <https://physics.nist.gov/cuu/Constants/>.

/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;

/// The Biot-Savart prefactor μ₀/4π in SI units (T·m/A).
///
/// Defined as exactly `1e-7`, the value used by the segment-wise field
/// evaluator. Before the 2019 SI redefinition this was exact by definition
/// of the ampere; the residual difference from `VACUUM_PERMEABILITY / 4π`
/// is below the crate's working precision.
pub const MU0_OVER_4PI: f64 = 1.0e-7;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn prefactor_consistent_with_permeability() {
        assert_relative_eq!(
            MU0_OVER_4PI,
            VACUUM_PERMEABILITY / (4.0 * std::f64::consts::PI),
            max_relative = 1.0e-9
        );
    }
}
