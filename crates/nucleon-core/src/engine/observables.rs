//! Quantities derived from binding energies and masses.
//!
//! Two notions of binding energy live here and are kept apart:
//!
//! - *Model* quantities (separation energies, mass excess) evaluate the SEMF for an
//!   explicit `(A, Z)`.
//! - *Empirical* quantities ([`binding_energy`], [`mass_defect`]) start from a
//!   [`MeasuredMass`] and infer Z from A with a legacy piecewise rule
//!   ([`approximate_atomic_number`]). That rule is a rough fit to stable nuclei and is
//!   expected to disagree with the valley-of-stability search.

use crate::core::constants::{
    ATOMIC_MASS_UNIT_KG, ATOMIC_MASS_UNIT_MEV, ELECTRON_VOLT, NEUTRON_MASS_KG, NEUTRON_MASS_MEV,
    PROTON_MASS_KG, PROTON_MASS_MEV, SPEED_OF_LIGHT,
};
use crate::core::models::channel::Particle;
use crate::core::models::mass::MeasuredMass;
use crate::core::models::nuclide::Nuclide;
use crate::core::semf;
use crate::engine::error::{EngineError, ensure_finite};

/// Binding energy of a free alpha particle (MeV).
pub const ALPHA_BINDING_ENERGY_MEV: f64 = 28.3;

/// Legacy estimate of the proton number of a stable nucleus of mass number A.
///
/// A ≤ 20: ⌊A/2⌋; A ≤ 40: ⌊A/2.1⌋; A ≤ 100: ⌊A/2.2⌋; otherwise ⌊A/2.4⌋.
pub fn approximate_atomic_number(a: u32) -> u32 {
    match a {
        0..=20 => a / 2,
        21..=40 => (a as f64 / 2.1) as u32,
        41..=100 => (a as f64 / 2.2) as u32,
        _ => (a as f64 / 2.4) as u32,
    }
}

fn approximate_nuclide(a: u32) -> Result<Nuclide, EngineError> {
    Ok(Nuclide::new(a, approximate_atomic_number(a))?)
}

/// Empirical binding energy (MeV) of a nucleus with measured atomic mass `mass`.
///
/// Uses SI masses: (Z·m_p + N·m_n − M·u)·c² converted to MeV, Z from
/// [`approximate_atomic_number`].
pub fn binding_energy(a: u32, mass: MeasuredMass) -> Result<f64, EngineError> {
    let nuclide = approximate_nuclide(a)?;
    let defect_kg = nuclide.proton_number() as f64 * PROTON_MASS_KG
        + nuclide.neutron_number() as f64 * NEUTRON_MASS_KG
        - mass.atomic_mass_u() * ATOMIC_MASS_UNIT_KG;
    let energy = defect_kg * SPEED_OF_LIGHT.powi(2) / ELECTRON_VOLT / 1e6;
    ensure_finite(energy, "empirical binding energy", &nuclide)
}

pub fn binding_energy_per_nucleon(a: u32, mass: MeasuredMass) -> Result<f64, EngineError> {
    Ok(binding_energy(a, mass)? / a as f64)
}

/// Mass defect (u): free-nucleon mass minus the measured atomic mass.
pub fn mass_defect(a: u32, mass: MeasuredMass) -> Result<f64, EngineError> {
    let nuclide = approximate_nuclide(a)?;
    let theoretical = nuclide.proton_number() as f64 * PROTON_MASS_MEV
        + nuclide.neutron_number() as f64 * NEUTRON_MASS_MEV;
    let actual = mass.atomic_mass_u() * ATOMIC_MASS_UNIT_MEV;
    ensure_finite(
        (theoretical - actual) / ATOMIC_MASS_UNIT_MEV,
        "mass defect",
        &nuclide,
    )
}

/// Mass excess (M − A)·u of the SEMF-predicted mass, in MeV.
pub fn mass_excess(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    let excess = (semf::atomic_mass(&nuclide) - a as f64) * ATOMIC_MASS_UNIT_MEV;
    ensure_finite(excess, "mass excess", &nuclide)
}

/// Binding energy of what is left after removing `(ΔA, ΔZ)`; zero if nothing is left.
fn remnant_binding_energy(
    nuclide: &Nuclide,
    removed_a: u32,
    removed_z: u32,
) -> Result<f64, EngineError> {
    Ok(nuclide
        .remnant(removed_a, removed_z)?
        .map_or(0.0, |remnant| semf::binding_energy(&remnant)))
}

pub(crate) fn separation_energy_of(
    nuclide: &Nuclide,
    particle: Particle,
) -> Result<f64, EngineError> {
    let (removed_a, removed_z) = particle.removed();
    let mut energy =
        semf::binding_energy(nuclide) - remnant_binding_energy(nuclide, removed_a, removed_z)?;
    if particle == Particle::Alpha {
        energy -= ALPHA_BINDING_ENERGY_MEV;
    }
    ensure_finite(energy, "separation energy", nuclide)
}

/// Energy needed to remove `particle` from (A, Z), in MeV.
///
/// S = B(A, Z) − B(A − ΔA, Z − ΔZ), minus the alpha binding energy for alpha removal.
/// Removing the last nucleons (e.g. an alpha from He-4) leaves an empty system with zero
/// binding energy.
pub fn separation_energy(a: u32, z: u32, particle: Particle) -> Result<f64, EngineError> {
    separation_energy_of(&Nuclide::new(a, z)?, particle)
}

/// S_2n = B(A, Z) − B(A − 2, Z), in MeV.
pub fn two_neutron_separation_energy(a: u32, z: u32) -> Result<f64, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    let energy = semf::binding_energy(&nuclide) - remnant_binding_energy(&nuclide, 2, 0)?;
    ensure_finite(energy, "two-neutron separation energy", &nuclide)
}
