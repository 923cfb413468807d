//! Binding energy per nucleon along the legacy approximate-Z path.
//!
//! Each mass number is paired with [`approximate_atomic_number`] rather than the
//! most stable charge, which reproduces the classic textbook curve.

use crate::engine::config::MassRange;
use crate::engine::error::EngineError;
use crate::engine::observables::approximate_atomic_number;
use crate::engine::semf::binding_energy_per_nucleon_semf;
use serde::Serialize;
use tracing::{debug, instrument};

/// Nuclei conventionally annotated on the binding-energy curve.
pub const LANDMARKS: [(u32, &str); 5] = [
    (4, "He-4"),
    (12, "C-12"),
    (16, "O-16"),
    (56, "Fe-56"),
    (238, "U-238"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub mass_number: u32,
    pub proton_number: u32,
    pub binding_energy_per_nucleon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

fn landmark(a: u32) -> Option<&'static str> {
    LANDMARKS
        .iter()
        .find(|(mass_number, _)| *mass_number == a)
        .map(|(_, name)| *name)
}

/// One point per A in the range. A = 1 maps to the free neutron (Z = 0).
#[instrument(level = "debug")]
pub fn run(a_min: u32, a_max: u32) -> Result<Vec<CurvePoint>, EngineError> {
    let range = MassRange::new("curve", a_min, a_max)?;
    let points = range
        .iter()
        .map(|a| {
            let z = approximate_atomic_number(a);
            Ok(CurvePoint {
                mass_number: a,
                proton_number: z,
                binding_energy_per_nucleon: binding_energy_per_nucleon_semf(a, z)?,
                label: landmark(a),
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    debug!(points = points.len(), "Binding curve computed.");
    Ok(points)
}
