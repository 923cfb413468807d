//! Shell-closure classification and liquid-drop geometry: magic numbers, radius, density.

use crate::core::constants::{ATOMIC_MASS_UNIT_KG, FEMTOMETRE, NUCLEAR_RADIUS_CONSTANT};
use crate::core::models::nuclide::Nuclide;
use crate::engine::error::EngineError;
use std::f64::consts::PI;

/// Nucleon counts that close a shell.
pub const MAGIC_NUMBERS: [u32; 7] = [2, 8, 20, 28, 50, 82, 126];

pub fn magic_numbers() -> &'static [u32] {
    &MAGIC_NUMBERS
}

#[inline]
fn is_magic(count: u32) -> bool {
    MAGIC_NUMBERS.contains(&count)
}

/// True when either the proton or the neutron number is magic.
pub fn is_magic_nucleus(a: u32, z: u32) -> Result<bool, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    Ok(is_magic(nuclide.proton_number()) || is_magic(nuclide.neutron_number()))
}

/// True when both the proton and the neutron number are magic.
pub fn is_doubly_magic(a: u32, z: u32) -> Result<bool, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    Ok(is_magic(nuclide.proton_number()) && is_magic(nuclide.neutron_number()))
}

/// R = r₀·A^(1/3), in fm.
pub fn nuclear_radius(a: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, 0)?;
    Ok(NUCLEAR_RADIUS_CONSTANT * (nuclide.mass_number() as f64).powf(1.0 / 3.0))
}

/// Nuclear matter density (kg/m³): one atomic mass unit per sphere of radius r₀.
///
/// Independent of A: every nucleon occupies the same volume in the liquid-drop picture.
pub fn nuclear_density() -> f64 {
    let r0 = NUCLEAR_RADIUS_CONSTANT * FEMTOMETRE;
    let volume_per_nucleon = 4.0 / 3.0 * PI * r0.powi(3);
    ATOMIC_MASS_UNIT_KG / volume_per_nucleon
}
