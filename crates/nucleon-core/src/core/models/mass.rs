use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Measured atomic mass must be a positive, finite number of u, got {0}")]
pub struct InvalidMassError(pub f64);

/// A measured atomic mass in unified atomic mass units (u).
///
/// Empirical quantities (binding energy from mass, mass defect) only accept this type,
/// so a mass predicted by the liquid-drop model cannot be passed where a measurement is
/// expected without an explicit conversion at the call site.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MeasuredMass(f64);

impl MeasuredMass {
    pub fn new(atomic_mass_u: f64) -> Result<Self, InvalidMassError> {
        if !atomic_mass_u.is_finite() || atomic_mass_u <= 0.0 {
            return Err(InvalidMassError(atomic_mass_u));
        }
        Ok(Self(atomic_mass_u))
    }

    #[inline]
    pub fn atomic_mass_u(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for MeasuredMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} u", self.0)
    }
}
