use super::load_table;
use crate::cli::LookupArgs;
use crate::error::Result;
use crate::output::{Lines, TextRender, number};
use nucleon::core::data::NuclideRecord;
use nucleon::engine::observables;
use serde::Serialize;

/// A measured record with the empirical quantities derived from its mass.
#[derive(Debug, Serialize)]
pub struct LookupOutput {
    #[serde(flatten)]
    pub record: NuclideRecord,
    /// Z assumed by the empirical formulas, which may differ from the record's Z.
    pub approximate_proton_number: u32,
    pub binding_energy: f64,
    pub binding_energy_per_nucleon: f64,
    pub mass_defect: f64,
}

pub fn run(args: &LookupArgs) -> Result<LookupOutput> {
    let table = load_table(args.data.as_deref())?;
    let record = table.get(&args.name)?.clone();
    let a = record.nuclide.mass_number();

    Ok(LookupOutput {
        approximate_proton_number: observables::approximate_atomic_number(a),
        binding_energy: observables::binding_energy(a, record.mass)?,
        binding_energy_per_nucleon: observables::binding_energy_per_nucleon(a, record.mass)?,
        mass_defect: observables::mass_defect(a, record.mass)?,
        record,
    })
}

impl TextRender for LookupOutput {
    fn render_text(&self, precision: usize) -> String {
        let p = precision;
        Lines::new()
            .heading(&format!("{} {}", self.record.name, self.record.nuclide))
            .field("Measured atomic mass", self.record.mass, "")
            .field("Approximate Z", self.approximate_proton_number, "")
            .field("Binding energy", number(self.binding_energy, p), "MeV")
            .field("Per nucleon", number(self.binding_energy_per_nucleon, p), "MeV")
            .field("Mass defect", number(self.mass_defect, p), "u")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;

    #[test]
    fn helium4_empirical_binding_energy() {
        let output = run(&LookupArgs {
            name: "He-4".to_string(),
            data: None,
        })
        .unwrap();
        assert!((output.binding_energy - 27.2739).abs() < 1e-3);
        assert!((output.mass_defect - 0.029_28).abs() < 1e-5);
        assert_eq!(output.approximate_proton_number, 2);
    }

    #[test]
    fn csv_file_extends_the_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,a,z,mass").unwrap();
        writeln!(file, "Pb-208,208,82,207.976652").unwrap();

        let output = run(&LookupArgs {
            name: "Pb-208".to_string(),
            data: Some(file.path().to_path_buf()),
        })
        .unwrap();
        assert_eq!(output.record.nuclide.proton_number(), 82);
        assert!(output.binding_energy_per_nucleon > 7.0);

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["name"], "Pb-208");
        assert_eq!(json["approximate_proton_number"], 86);
    }

    #[test]
    fn missing_name_lists_available_records() {
        let err = run(&LookupArgs {
            name: "Pb-208".to_string(),
            data: None,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Data(_)));
        assert!(err.to_string().contains("Fe-56"));
    }
}
