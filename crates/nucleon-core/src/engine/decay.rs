//! Decay Q-values from SEMF mass predictions.
//!
//! A positive Q-value means the decay is energetically allowed.

use crate::core::constants::{ATOMIC_MASS_UNIT_MEV, ELECTRON_MASS_MEV};
use crate::core::models::channel::DecayMode;
use crate::core::models::nuclide::{Nuclide, NuclideError};
use crate::core::semf;
use crate::engine::error::{EngineError, ensure_finite};
use tracing::trace;

/// Measured atomic mass of He-4 (u).
pub const ALPHA_PARTICLE_MASS_U: f64 = 4.002603;

/// Q_α = [M(A, Z) − M(A − 4, Z − 2) − M_α]·u, in MeV.
///
/// The daughter must itself be a nucleus, so A ≤ 4 is a domain error.
pub fn q_value_alpha_decay(a: u32, z: u32) -> Result<f64, EngineError> {
    let parent = Nuclide::new(a, z)?;
    let daughter = parent
        .remnant(4, 2)?
        .ok_or(NuclideError::OutOfDomain { a: 0, z: 0 })?;
    trace!(%parent, %daughter, "Alpha decay");
    let q = (semf::atomic_mass(&parent) - semf::atomic_mass(&daughter) - ALPHA_PARTICLE_MASS_U)
        * ATOMIC_MASS_UNIT_MEV;
    ensure_finite(q, "alpha-decay Q-value", &parent)
}

/// Beta-decay Q-value in MeV.
///
/// - beta-: [M(A, Z) − M(A, Z + 1)]·u
/// - beta+: [M(A, Z) − M(A, Z − 1)]·u − 2·m_e c²
pub fn q_value_beta_decay(a: u32, z: u32, mode: DecayMode) -> Result<f64, EngineError> {
    let parent = Nuclide::new(a, z)?;
    let q = match mode {
        DecayMode::BetaMinus => {
            let daughter = parent.isobar(1)?;
            (semf::atomic_mass(&parent) - semf::atomic_mass(&daughter)) * ATOMIC_MASS_UNIT_MEV
        }
        DecayMode::BetaPlus => {
            let daughter = parent.isobar(-1)?;
            (semf::atomic_mass(&parent) - semf::atomic_mass(&daughter)) * ATOMIC_MASS_UNIT_MEV
                - 2.0 * ELECTRON_MASS_MEV
        }
    };
    ensure_finite(q, "beta-decay Q-value", &parent)
}
