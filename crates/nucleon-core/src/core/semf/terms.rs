use super::coefficients;
use crate::core::models::nuclide::{Nuclide, Parity};
use serde::Serialize;

#[inline]
pub fn volume(nuclide: &Nuclide) -> f64 {
    coefficients::VOLUME * nuclide.mass_number() as f64
}

#[inline]
pub fn surface(nuclide: &Nuclide) -> f64 {
    coefficients::SURFACE * (nuclide.mass_number() as f64).powf(2.0 / 3.0)
}

#[inline]
pub fn coulomb(nuclide: &Nuclide) -> f64 {
    let z = nuclide.proton_number() as f64;
    coefficients::COULOMB * z.powi(2) / (nuclide.mass_number() as f64).powf(1.0 / 3.0)
}

#[inline]
pub fn asymmetry(nuclide: &Nuclide) -> f64 {
    let a = nuclide.mass_number() as f64;
    let z = nuclide.proton_number() as f64;
    coefficients::ASYMMETRY * (a - 2.0 * z).powi(2) / a
}

/// Signed pairing term δ.
#[inline]
pub fn pairing(nuclide: &Nuclide) -> f64 {
    let magnitude = coefficients::PAIRING / (nuclide.mass_number() as f64).sqrt();
    match nuclide.parity() {
        Parity::EvenEven => magnitude,
        Parity::OddOdd => -magnitude,
        Parity::OddEven => 0.0,
    }
}

/// The five liquid-drop contributions for one nucleus (MeV).
///
/// `volume`, `surface`, `coulomb` and `asymmetry` hold magnitudes; `pairing` is signed.
/// [`SemfTerms::total`] applies the signs of the mass formula.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SemfTerms {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
}

impl SemfTerms {
    pub fn of(nuclide: &Nuclide) -> Self {
        Self {
            volume: volume(nuclide),
            surface: surface(nuclide),
            coulomb: coulomb(nuclide),
            asymmetry: asymmetry(nuclide),
            pairing: pairing(nuclide),
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.volume - self.surface - self.coulomb - self.asymmetry + self.pairing
    }
}
