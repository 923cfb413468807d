use crate::cli::SeparationArgs;
use crate::error::Result;
use crate::output::{Lines, TextRender, number};
use nucleon::core::models::channel::Particle;
use nucleon::core::models::nuclide::Nuclide;
use nucleon::engine::error::EngineError;
use nucleon::engine::observables;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct SeparationOutput {
    pub nuclide: Nuclide,
    pub removed: String,
    pub energy: f64,
}

pub fn run(args: &SeparationArgs) -> Result<SeparationOutput> {
    let a = args.nuclide.mass_number;
    let z = args.nuclide.proton_number;
    let nuclide = Nuclide::new(a, z).map_err(EngineError::from)?;

    let (removed, energy) = match args.particle.trim().to_ascii_lowercase().as_str() {
        "two-neutron" | "2n" => (
            "two-neutron".to_string(),
            observables::two_neutron_separation_energy(a, z)?,
        ),
        other => {
            let particle: Particle = other.parse().map_err(EngineError::from)?;
            (
                particle.to_string(),
                observables::separation_energy(a, z, particle)?,
            )
        }
    };
    info!("{} separation energy of {}: {:.4} MeV", removed, nuclide, energy);

    Ok(SeparationOutput {
        nuclide,
        removed,
        energy,
    })
}

impl TextRender for SeparationOutput {
    fn render_text(&self, precision: usize) -> String {
        Lines::new()
            .heading(&format!("Removing {} from {}", self.removed, self.nuclide))
            .field("Separation energy", number(self.energy, precision), "MeV")
            .field("Bound", self.energy > 0.0, "")
            .finish()
    }
}
