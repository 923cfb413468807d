use crate::cli::CurveArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{TextRender, number};
use nucleon::workflows::curve::{self, CurvePoint};
use std::fmt::Write;

pub fn run(args: &CurveArgs, config: &AppConfig) -> Result<Vec<CurvePoint>> {
    let range = config.curve_range(&args.range)?;
    Ok(curve::run(range.min, range.max)?)
}

impl TextRender for [CurvePoint] {
    fn render_text(&self, precision: usize) -> String {
        let mut out = format!("{:>5} {:>5} {:>14}", "A", "Z", "BE/A [MeV]");
        for point in self {
            let _ = write!(
                out,
                "\n{:>5} {:>5} {:>14}",
                point.mass_number,
                point.proton_number,
                number(point.binding_energy_per_nucleon, precision)
            );
            if let Some(label) = point.label {
                let _ = write!(out, "  {}", label);
            }
        }
        out
    }
}
