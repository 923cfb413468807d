use super::load_table;
use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use crate::output::{Lines, TextRender, number, optional};
use nucleon::workflows::report::{self, NuclideReport};
use tracing::info;

pub fn run(args: &InspectArgs) -> Result<NuclideReport> {
    match (&args.nuclide, args.mass_number, args.proton_number) {
        (Some(name), _, _) => {
            let table = load_table(args.data.as_deref())?;
            let record = table.get(name)?;
            info!("Inspecting measured nuclide {} {}.", record.name, record.nuclide);
            Ok(report::run_for_record(record)?)
        }
        (None, Some(a), Some(z)) => {
            info!("Inspecting nuclide (A={}, Z={}).", a, z);
            Ok(report::run(a, z)?)
        }
        _ => Err(CliError::Argument(
            "either <A> <Z> or --nuclide <NAME> is required".to_string(),
        )),
    }
}

impl TextRender for NuclideReport {
    fn render_text(&self, precision: usize) -> String {
        let p = precision;
        let mut lines = Lines::new();
        lines
            .heading(&format!("Nuclide {}", self.nuclide))
            .field("Neutron number", self.neutron_number, "")
            .field("Parity", self.parity, "")
            .field("Magic", self.magic, "")
            .field("Doubly magic", self.doubly_magic, "")
            .field("Radius", number(self.radius, p), "fm");

        lines
            .heading("Binding energy")
            .field("Volume", number(self.terms.volume, p), "MeV")
            .field("Surface", number(-self.terms.surface, p), "MeV")
            .field("Coulomb", number(-self.terms.coulomb, p), "MeV")
            .field("Asymmetry", number(-self.terms.asymmetry, p), "MeV")
            .field("Pairing", number(self.terms.pairing, p), "MeV")
            .field("Total", number(self.binding_energy, p), "MeV")
            .field("Per nucleon", number(self.binding_energy_per_nucleon, p), "MeV");

        lines
            .heading("Mass")
            .field("Predicted atomic mass", number(self.predicted_mass, p), "u")
            .field("Mass excess", number(self.mass_excess, p), "MeV")
            .field("Liquid-drop energy", number(self.liquid_drop_energy, p), "MeV");

        lines
            .heading("Separation energies")
            .field("S_n", optional(self.separation.neutron, p), "MeV")
            .field("S_p", optional(self.separation.proton, p), "MeV")
            .field("S_alpha", optional(self.separation.alpha, p), "MeV")
            .field("S_2n", optional(self.separation.two_neutron, p), "MeV");

        lines
            .heading("Decay Q-values")
            .field("Alpha", optional(self.q_values.alpha, p), "MeV")
            .field("Beta-", optional(self.q_values.beta_minus, p), "MeV")
            .field("Beta+", optional(self.q_values.beta_plus, p), "MeV");

        if let Some(measured) = &self.measured {
            lines
                .heading(&format!("Measured ({})", measured.name))
                .field("Atomic mass", measured.measured_mass, "")
                .field("Predicted - measured", number(measured.mass_residual, p), "u")
                .field(
                    "Empirical binding energy",
                    number(measured.empirical_binding_energy, p),
                    "MeV",
                )
                .field("Mass defect", number(measured.mass_defect, p), "u");
        }
        lines.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: Option<u32>, z: Option<u32>, nuclide: Option<&str>) -> InspectArgs {
        InspectArgs {
            mass_number: a,
            proton_number: z,
            nuclide: nuclide.map(str::to_string),
            data: None,
        }
    }

    #[test]
    fn inspect_by_numbers_renders_all_sections() {
        let report = run(&args(Some(4), Some(2), None)).unwrap();
        let text = report.render_text(3);
        assert!(text.starts_with("Nuclide (A=4, Z=2)"));
        assert!(text.contains("Separation energies"));
        assert!(text.contains("n/a"));
        assert!(!text.contains("Measured"));
    }

    #[test]
    fn inspect_by_name_includes_measurement() {
        let report = run(&args(None, None, Some("U-238"))).unwrap();
        assert_eq!(report.nuclide.mass_number(), 238);
        assert!(report.render_text(4).contains("Measured (U-238)"));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = run(&args(None, None, Some("Xx-1"))).unwrap_err();
        assert!(matches!(err, CliError::Data(_)));
    }
}
