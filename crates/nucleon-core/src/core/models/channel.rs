use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported particle type: '{0}'. Expected 'neutron', 'proton' or 'alpha'.")]
pub struct ParseParticleError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported decay type: '{0}'. Expected 'beta-' or 'beta+'.")]
pub struct ParseDecayModeError(pub String);

/// The particle removed when computing a separation energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Particle {
    Neutron,
    Proton,
    Alpha,
}

impl Particle {
    /// Nucleons and protons carried away, as `(ΔA, ΔZ)`.
    #[inline]
    pub fn removed(&self) -> (u32, u32) {
        match self {
            Self::Neutron => (1, 0),
            Self::Proton => (1, 1),
            Self::Alpha => (4, 2),
        }
    }
}

impl FromStr for Particle {
    type Err = ParseParticleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "neutron" => Ok(Self::Neutron),
            "p" | "proton" => Ok(Self::Proton),
            "a" | "alpha" => Ok(Self::Alpha),
            _ => Err(ParseParticleError(s.to_string())),
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Neutron => "neutron",
                Self::Proton => "proton",
                Self::Alpha => "alpha",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecayMode {
    /// n -> p + e- + antineutrino; the daughter has Z + 1.
    #[serde(rename = "beta-")]
    BetaMinus,
    /// p -> n + e+ + neutrino; the daughter has Z - 1.
    #[serde(rename = "beta+")]
    BetaPlus,
}

impl FromStr for DecayMode {
    type Err = ParseDecayModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beta-" | "beta-minus" | "b-" => Ok(Self::BetaMinus),
            "beta+" | "beta-plus" | "b+" => Ok(Self::BetaPlus),
            _ => Err(ParseDecayModeError(s.to_string())),
        }
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::BetaMinus => "beta-",
                Self::BetaPlus => "beta+",
            }
        )
    }
}
