use thiserror::Error;

use crate::core::models::channel::{ParseDecayModeError, ParseParticleError};
use crate::core::models::nuclide::{Nuclide, NuclideError};
use crate::engine::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] NuclideError),

    #[error(transparent)]
    UnsupportedParticle(#[from] ParseParticleError),

    #[error(transparent)]
    UnsupportedDecayMode(#[from] ParseDecayModeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid mass-number range: {a_min}..={a_max} (requires 1 <= A_min <= A_max)")]
    InvalidRange { a_min: u32, a_max: u32 },

    #[error("Drip-line search requires Z >= 1, got Z={0}")]
    InvalidProtonNumber(u32),

    #[error("Non-finite {quantity} for nuclide {nuclide}")]
    NonFinite {
        quantity: &'static str,
        nuclide: Nuclide,
    },
}

/// Converts a NaN or infinite result into an explicit failure.
#[inline]
pub(crate) fn ensure_finite(
    value: f64,
    quantity: &'static str,
    nuclide: &Nuclide,
) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NonFinite {
            quantity,
            nuclide: *nuclide,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_passes_through_regular_values() {
        let n = Nuclide::new(4, 2).unwrap();
        assert_eq!(ensure_finite(1.5, "test", &n).unwrap(), 1.5);
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        let n = Nuclide::new(4, 2).unwrap();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_finite(value, "binding energy", &n).unwrap_err();
            assert!(matches!(err, EngineError::NonFinite { .. }));
            assert_eq!(
                err.to_string(),
                "Non-finite binding energy for nuclide (A=4, Z=2)"
            );
        }
    }

    #[test]
    fn domain_errors_keep_their_message() {
        let err: EngineError = NuclideError::OutOfDomain { a: 0, z: 0 }.into();
        assert!(err.to_string().contains("A=0, Z=0"));
    }
}
