use crate::cli::DecayArgs;
use crate::error::Result;
use crate::output::{Lines, TextRender, number};
use nucleon::core::models::channel::DecayMode;
use nucleon::core::models::nuclide::Nuclide;
use nucleon::engine::decay;
use nucleon::engine::error::EngineError;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct DecayOutput {
    pub nuclide: Nuclide,
    pub mode: String,
    pub q_value: f64,
    pub allowed: bool,
}

pub fn run(args: &DecayArgs) -> Result<DecayOutput> {
    let a = args.nuclide.mass_number;
    let z = args.nuclide.proton_number;
    let nuclide = Nuclide::new(a, z).map_err(EngineError::from)?;

    let (mode, q_value) = if args.mode.trim().eq_ignore_ascii_case("alpha") {
        ("alpha".to_string(), decay::q_value_alpha_decay(a, z)?)
    } else {
        let mode: DecayMode = args.mode.parse().map_err(EngineError::from)?;
        (mode.to_string(), decay::q_value_beta_decay(a, z, mode)?)
    };
    info!("Q-value of {} decay of {}: {:.4} MeV", mode, nuclide, q_value);

    Ok(DecayOutput {
        nuclide,
        mode,
        q_value,
        allowed: q_value > 0.0,
    })
}

impl TextRender for DecayOutput {
    fn render_text(&self, precision: usize) -> String {
        Lines::new()
            .heading(&format!("{} decay of {}", self.mode, self.nuclide))
            .field("Q-value", number(self.q_value, precision), "MeV")
            .field("Energetically allowed", self.allowed, "")
            .finish()
    }
}
