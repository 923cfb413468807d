//! # Semi-Empirical Mass Formula
//!
//! The liquid-drop model of the nucleus. The binding energy is the signed sum of five
//! terms,
//!
//! B(A, Z) = a_v·A − a_s·A^(2/3) − a_c·Z²/A^(1/3) − a_A·(A − 2Z)²/A + δ(A, Z)
//!
//! with the pairing term δ = +a_p/√A for even-even, −a_p/√A for odd-odd and 0 for
//! odd-A nuclei. The coefficients are fixed ([`coefficients`]).
//!
//! - [`terms`] - The individual contributions, used both by the total and by diagnostics
//!
//! The atomic mass predicted by the model follows from the nucleon rest energies:
//! M(A, Z) = (Z·m_p + N·m_n − B) / u, everything in MeV.

pub mod coefficients;
pub mod terms;

use crate::core::constants::{ATOMIC_MASS_UNIT_MEV, NEUTRON_MASS_MEV, PROTON_MASS_MEV};
use crate::core::models::nuclide::Nuclide;
use terms::SemfTerms;

/// Total binding energy (MeV).
#[inline]
pub fn binding_energy(nuclide: &Nuclide) -> f64 {
    SemfTerms::of(nuclide).total()
}

/// Rest energy of the free constituent nucleons (MeV).
#[inline]
pub fn nucleon_rest_energy(nuclide: &Nuclide) -> f64 {
    nuclide.proton_number() as f64 * PROTON_MASS_MEV
        + nuclide.neutron_number() as f64 * NEUTRON_MASS_MEV
}

/// Rest energy of the bound liquid drop: free nucleons minus binding (MeV).
#[inline]
pub fn liquid_drop_energy(nuclide: &Nuclide) -> f64 {
    nucleon_rest_energy(nuclide) - binding_energy(nuclide)
}

/// Predicted atomic mass (u).
#[inline]
pub fn atomic_mass(nuclide: &Nuclide) -> f64 {
    liquid_drop_energy(nuclide) / ATOMIC_MASS_UNIT_MEV
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nuclide(a: u32, z: u32) -> Nuclide {
        Nuclide::new(a, z).unwrap()
    }

    #[test]
    fn iron56_binding_energy_per_nucleon_is_near_the_peak() {
        let b = binding_energy(&nuclide(56, 26));
        assert!((b - 490.5518).abs() < 1e-3, "got {b}");
        assert!(b / 56.0 > 8.7 && b / 56.0 < 8.9);
    }

    #[test]
    fn lead208_binding_energy_order_of_magnitude() {
        let b = binding_energy(&nuclide(208, 82));
        assert!(b > 1550.0 && b < 1700.0, "Pb-208 SEMF should be ~1636 MeV, got {b}");
    }

    #[test]
    fn predicted_mass_of_iron56_is_close_to_measurement() {
        let m = atomic_mass(&nuclide(56, 26));
        assert!((m - 55.9225).abs() < 1e-3, "got {m}");
    }

    #[test]
    fn atomic_mass_is_liquid_drop_energy_in_mass_units() {
        let n = nuclide(238, 92);
        assert_eq!(
            atomic_mass(&n),
            liquid_drop_energy(&n) / ATOMIC_MASS_UNIT_MEV
        );
    }

    #[test]
    fn even_even_binds_more_than_neighbouring_odd_odd() {
        let b_ee = binding_energy(&nuclide(208, 82));
        let b_oo = binding_energy(&nuclide(208, 81));
        assert!(b_ee > b_oo, "{b_ee} vs {b_oo}");
    }

    #[test]
    fn binding_energy_is_bitwise_deterministic() {
        let nuclei = [(26, 56), (82, 208), (50, 132), (8, 16), (2, 4), (92, 238)];
        let run = || -> Vec<f64> {
            nuclei
                .iter()
                .map(|&(z, a)| binding_energy(&nuclide(a, z)))
                .collect()
        };
        let first = run();
        let second = run();
        for (i, (x, y)) in first.iter().zip(second.iter()).enumerate() {
            assert_eq!(x.to_bits(), y.to_bits(), "mismatch at {:?}", nuclei[i]);
        }
    }
}
