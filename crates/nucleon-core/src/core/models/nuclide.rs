use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NuclideError {
    #[error("Invalid nuclide (A={a}, Z={z}): requires A >= 1 and 0 <= Z <= A")]
    OutOfDomain { a: i64, z: i64 },
}

/// Nucleon-number parity of a nucleus, the only input to the pairing term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parity {
    EvenEven,
    OddOdd,
    /// Odd mass number: either Z or N is odd, but not both.
    OddEven,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::EvenEven => "even-even",
                Self::OddOdd => "odd-odd",
                Self::OddEven => "odd-even",
            }
        )
    }
}

/// A nucleus identified by its mass number A and proton number Z.
///
/// The neutron number is always derived as N = A - Z. Construction is the only place
/// the domain (A >= 1, 0 <= Z <= A) is checked, so every `Nuclide` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Nuclide {
    #[serde(rename = "a")]
    mass_number: u32,
    #[serde(rename = "z")]
    proton_number: u32,
}

impl Nuclide {
    pub fn new(mass_number: u32, proton_number: u32) -> Result<Self, NuclideError> {
        if mass_number == 0 || proton_number > mass_number {
            return Err(NuclideError::OutOfDomain {
                a: mass_number as i64,
                z: proton_number as i64,
            });
        }
        Ok(Self {
            mass_number,
            proton_number,
        })
    }

    #[inline]
    pub fn mass_number(&self) -> u32 {
        self.mass_number
    }

    #[inline]
    pub fn proton_number(&self) -> u32 {
        self.proton_number
    }

    #[inline]
    pub fn neutron_number(&self) -> u32 {
        self.mass_number - self.proton_number
    }

    pub fn parity(&self) -> Parity {
        match (self.proton_number % 2, self.neutron_number() % 2) {
            (0, 0) => Parity::EvenEven,
            (1, 1) => Parity::OddOdd,
            _ => Parity::OddEven,
        }
    }

    /// The system left after removing `removed_a` nucleons, `removed_z` of them protons.
    ///
    /// Returns `Ok(None)` when nothing is left (A = 0, Z = 0), which is a legitimate
    /// outcome of e.g. removing an alpha particle from He-4. Any other remnant outside the
    /// nuclide domain is an error.
    pub fn remnant(&self, removed_a: u32, removed_z: u32) -> Result<Option<Nuclide>, NuclideError> {
        let a = self.mass_number as i64 - removed_a as i64;
        let z = self.proton_number as i64 - removed_z as i64;
        if a == 0 && z == 0 {
            return Ok(None);
        }
        if a < 1 || z < 0 || z > a {
            return Err(NuclideError::OutOfDomain { a, z });
        }
        Self::new(a as u32, z as u32).map(Some)
    }

    /// The isobar with proton number changed by `delta` (beta-decay daughters).
    pub fn isobar(&self, delta: i32) -> Result<Nuclide, NuclideError> {
        let z = self.proton_number as i64 + delta as i64;
        if z < 0 || z > self.mass_number as i64 {
            return Err(NuclideError::OutOfDomain {
                a: self.mass_number as i64,
                z,
            });
        }
        Self::new(self.mass_number, z as u32)
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(A={}, Z={})", self.mass_number, self.proton_number)
    }
}
