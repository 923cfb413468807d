//! Stability searches over the SEMF mass surface.
//!
//! Both searches are plain linear scans. The mass surface is not guaranteed to be
//! unimodal in Z, and separation energies are only assumed (not verified) to cross zero
//! once, so no bracketing or bisection is attempted.

use crate::core::models::channel::Particle;
use crate::core::models::nuclide::Nuclide;
use crate::core::semf;
use crate::engine::error::EngineError;
use crate::engine::observables::separation_energy_of;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Drip-line searches stop below this mass number and return it when no sign change is found.
pub const DRIP_LINE_CEILING: u32 = 300;

/// Proton number minimizing the predicted atomic mass of isobars with mass number A.
///
/// Scans Z = 1..A−1 in increasing order; ties keep the lower Z. For A = 1 the scan range
/// is empty and Z = 1 is returned.
pub fn most_stable_proton_number(a: u32) -> Result<u32, EngineError> {
    let mut best_z = 1;
    let mut min_mass = f64::INFINITY;
    for z in 1..a {
        let mass = semf::atomic_mass(&Nuclide::new(a, z)?);
        if mass < min_mass {
            min_mass = mass;
            best_z = z;
        }
    }
    Ok(best_z)
}

/// Most stable Z for every A in `a_min..=a_max`, indexed by A − A_min.
#[instrument(level = "debug")]
pub fn valley_of_stability(a_min: u32, a_max: u32) -> Result<Vec<u32>, EngineError> {
    if a_min == 0 || a_min > a_max {
        return Err(EngineError::InvalidRange { a_min, a_max });
    }

    #[cfg(not(feature = "parallel"))]
    let iterator = a_min..=a_max;

    #[cfg(feature = "parallel")]
    let iterator = (a_min..=a_max).into_par_iter();

    let valley = iterator
        .map(most_stable_proton_number)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = valley.len(), "Valley of stability computed.");
    Ok(valley)
}

fn drip_line(z: u32, particle: Particle, first_a: u32) -> Result<u32, EngineError> {
    if z == 0 {
        return Err(EngineError::InvalidProtonNumber(z));
    }
    for a in first_a..DRIP_LINE_CEILING {
        let separation = separation_energy_of(&Nuclide::new(a, z)?, particle)?;
        if separation <= 0.0 {
            debug!(z, a, separation, %particle, "Separation energy crossed zero.");
            return Ok(a - 1);
        }
    }
    debug!(z, %particle, "No drip line below the search ceiling.");
    Ok(DRIP_LINE_CEILING)
}

/// Heaviest isotope of element Z still bound against neutron emission.
///
/// Scans upward from A = Z + 1 (the lightest isotope with a neutron to remove) and returns
/// A − 1 at the first non-positive S_n, or [`DRIP_LINE_CEILING`].
#[instrument(level = "debug")]
pub fn neutron_drip_line(z: u32) -> Result<u32, EngineError> {
    drip_line(z, Particle::Neutron, z.saturating_add(1))
}

/// Proton drip line of element Z.
///
/// Scans upward from A = Z and returns A − 1 at the first non-positive S_p, or
/// [`DRIP_LINE_CEILING`].
#[instrument(level = "debug")]
pub fn proton_drip_line(z: u32) -> Result<u32, EngineError> {
    drip_line(z, Particle::Proton, z)
}
