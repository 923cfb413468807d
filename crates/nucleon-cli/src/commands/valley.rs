use crate::cli::ValleyArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{TextRender, number};
use crate::utils::progress::CliProgressHandler;
use nucleon::engine::progress::ProgressReporter;
use nucleon::workflows::survey::{self, SurveyRow};
use std::fmt::Write;
use tracing::info;

pub fn run(args: &ValleyArgs, config: &AppConfig) -> Result<Vec<SurveyRow>> {
    let survey_config = config.survey_config(&args.range, args.drip_lines)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the stability survey workflow...");
    let rows = survey::run(&survey_config, &reporter)?;
    info!("Survey finished with {} row(s).", rows.len());
    Ok(rows)
}

impl TextRender for [SurveyRow] {
    fn render_text(&self, precision: usize) -> String {
        let with_drip = self.iter().any(|row| row.drip_lines.is_some());
        let mut out = format!(
            "{:>5} {:>5} {:>5} {:>14} {:>16}",
            "A", "Z", "N", "BE/A [MeV]", "Excess [MeV]"
        );
        if with_drip {
            let _ = write!(out, " {:>8} {:>8}", "n-drip", "p-drip");
        }
        for row in self {
            let _ = write!(
                out,
                "\n{:>5} {:>5} {:>5} {:>14} {:>16}",
                row.mass_number,
                row.proton_number,
                row.neutron_number,
                number(row.binding_energy_per_nucleon, precision),
                number(row.mass_excess, precision),
            );
            if let Some(drip) = row.drip_lines {
                let _ = write!(out, " {:>8} {:>8}", drip.neutron, drip.proton);
            }
        }
        out
    }
}
