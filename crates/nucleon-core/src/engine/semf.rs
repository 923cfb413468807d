//! Checked `(A, Z)` entry points to the liquid-drop model.
//!
//! Each function validates the nuclide, evaluates the model in [`crate::core::semf`] and
//! refuses to return a non-finite number.

use crate::core::models::nuclide::Nuclide;
use crate::core::semf::{self as model, terms, terms::SemfTerms};
use crate::engine::error::{EngineError, ensure_finite};

/// Total SEMF binding energy B(A, Z) in MeV.
pub fn binding_energy_semf(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    ensure_finite(model::binding_energy(&nuclide), "binding energy", &nuclide)
}

pub fn binding_energy_per_nucleon_semf(a: u32, z: u32) -> Result<f64, EngineError> {
    Ok(binding_energy_semf(a, z)? / a as f64)
}

/// Atomic mass predicted by the SEMF, in u.
pub fn predict_mass(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    ensure_finite(model::atomic_mass(&nuclide), "predicted mass", &nuclide)
}

/// Rest energy of the bound nucleus, Z·m_p + N·m_n − B, in MeV.
pub fn liquid_drop_energy(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    ensure_finite(
        model::liquid_drop_energy(&nuclide),
        "liquid-drop energy",
        &nuclide,
    )
}

/// All five contributions at once.
pub fn semf_terms(a: u32, z: u32) -> Result<SemfTerms, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    let t = SemfTerms::of(&nuclide);
    ensure_finite(t.total(), "binding-energy terms", &nuclide)?;
    Ok(t)
}

pub fn volume_energy(a: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, 0)?;
    Ok(terms::volume(&nuclide))
}

pub fn surface_energy(a: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, 0)?;
    Ok(terms::surface(&nuclide))
}

pub fn coulomb_energy(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    Ok(terms::coulomb(&nuclide))
}

pub fn asymmetry_energy(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    Ok(terms::asymmetry(&nuclide))
}

/// Signed pairing term δ(A, Z).
pub fn pairing_energy(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    Ok(terms::pairing(&nuclide))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::nuclide::NuclideError;

    #[test]
    fn binding_energy_equals_signed_sum_of_decomposition() {
        for (a, z) in [(1, 0), (1, 1), (4, 2), (5, 2), (14, 7), (56, 26), (208, 82), (238, 92)] {
            let total = binding_energy_semf(a, z).unwrap();
            let sum = volume_energy(a).unwrap()
                - surface_energy(a).unwrap()
                - coulomb_energy(a, z).unwrap()
                - asymmetry_energy(a, z).unwrap()
                + pairing_energy(a, z).unwrap();
            assert!((total - sum).abs() < 1e-9, "A={a} Z={z}: {total} vs {sum}");
        }
    }

    #[test]
    fn semf_terms_agree_with_individual_functions() {
        let t = semf_terms(238, 92).unwrap();
        assert_eq!(t.coulomb, coulomb_energy(238, 92).unwrap());
        assert_eq!(t.surface, surface_energy(238).unwrap());
        assert_eq!(t.total(), binding_energy_semf(238, 92).unwrap());
    }

    #[test]
    fn zero_mass_number_is_a_domain_error() {
        assert!(matches!(
            binding_energy_semf(0, 0),
            Err(EngineError::Domain(NuclideError::OutOfDomain { a: 0, z: 0 }))
        ));
        assert!(predict_mass(0, 0).is_err());
        assert!(surface_energy(0).is_err());
    }

    #[test]
    fn excess_protons_are_a_domain_error() {
        assert!(matches!(
            predict_mass(4, 5),
            Err(EngineError::Domain(_))
        ));
        assert!(coulomb_energy(3, 4).is_err());
    }

    #[test]
    fn helium4_pairing_is_positive_and_helium5_pairing_is_zero() {
        assert!(pairing_energy(4, 2).unwrap() > 0.0);
        assert_eq!(pairing_energy(5, 2).unwrap(), 0.0);
    }

    #[test]
    fn per_nucleon_divides_by_mass_number() {
        let be = binding_energy_semf(56, 26).unwrap();
        assert_eq!(binding_energy_per_nucleon_semf(56, 26).unwrap(), be / 56.0);
    }

    #[test]
    fn predicted_mass_is_close_to_mass_number() {
        for (a, z) in [(12, 6), (56, 26), (208, 82)] {
            let m = predict_mass(a, z).unwrap();
            assert!((m - a as f64).abs() < 0.1, "A={a}: {m}");
        }
    }

    #[test]
    fn liquid_drop_energy_of_iron56() {
        let e = liquid_drop_energy(56, 26).unwrap();
        assert!((e - 52091.485).abs() < 1e-2, "got {e}");
    }
}
