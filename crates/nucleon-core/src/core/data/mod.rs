//! # Nuclide Data
//!
//! Measured atomic masses of common nuclides, keyed by labels such as `"He-4"`.
//!
//! - [`builtin`] - The compiled-in table and the [`builtin::get_nuclear_data`] lookup
//! - [`table`] - An owned, extendable repository seeded from the built-in table that can
//!   absorb additional measurements from CSV files
//!
//! The repository is a convenience mapping from human-readable names to `(A, Z, mass)`.
//! Calculators in [`crate::engine`] take raw numbers, never names.

pub mod builtin;
pub mod table;

use crate::core::models::mass::{InvalidMassError, MeasuredMass};
use crate::core::models::nuclide::{Nuclide, NuclideError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Nucleus {name} not found. Available: {available}")]
    NotFound { name: String, available: String },

    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Invalid nuclide record '{name}': {source}")]
    InvalidNuclide { name: String, source: NuclideError },

    #[error("Invalid mass for record '{name}': {source}")]
    InvalidMass {
        name: String,
        source: InvalidMassError,
    },
}

/// One measured nuclide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NuclideRecord {
    pub name: String,
    pub nuclide: Nuclide,
    pub mass: MeasuredMass,
}

impl NuclideRecord {
    pub fn new(name: &str, a: u32, z: u32, mass_u: f64) -> Result<Self, DataError> {
        let nuclide = Nuclide::new(a, z).map_err(|source| DataError::InvalidNuclide {
            name: name.to_string(),
            source,
        })?;
        let mass = MeasuredMass::new(mass_u).map_err(|source| DataError::InvalidMass {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            nuclide,
            mass,
        })
    }
}
