use crate::core::data::NuclideRecord;
use crate::core::models::channel::{DecayMode, Particle};
use crate::core::models::mass::MeasuredMass;
use crate::core::models::nuclide::{Nuclide, Parity};
use crate::core::semf::terms::SemfTerms;
use crate::engine::error::EngineError;
use crate::engine::{decay, observables, semf, structure};
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeparationEnergies {
    pub neutron: Option<f64>,
    pub proton: Option<f64>,
    pub alpha: Option<f64>,
    pub two_neutron: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QValues {
    pub alpha: Option<f64>,
    pub beta_minus: Option<f64>,
    pub beta_plus: Option<f64>,
}

/// Measured mass of the nucleus next to the model's prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredComparison {
    pub name: String,
    pub measured_mass: MeasuredMass,
    /// Predicted minus measured mass (u).
    pub mass_residual: f64,
    pub empirical_binding_energy: f64,
    pub mass_defect: f64,
}

/// Every observable of one nucleus. Energies in MeV, masses in u, radius in fm.
///
/// Observables whose daughter or remnant lies outside the nuclide domain are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NuclideReport {
    pub nuclide: Nuclide,
    pub neutron_number: u32,
    pub parity: Parity,
    pub terms: SemfTerms,
    pub binding_energy: f64,
    pub binding_energy_per_nucleon: f64,
    pub predicted_mass: f64,
    pub mass_excess: f64,
    pub liquid_drop_energy: f64,
    pub separation: SeparationEnergies,
    pub q_values: QValues,
    pub magic: bool,
    pub doubly_magic: bool,
    pub radius: f64,
    pub measured: Option<MeasuredComparison>,
}

fn optional(result: Result<f64, EngineError>) -> Result<Option<f64>, EngineError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(EngineError::Domain(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[instrument(level = "debug")]
pub fn run(a: u32, z: u32) -> Result<NuclideReport, EngineError> {
    let nuclide = Nuclide::new(a, z)?;
    let binding_energy = semf::binding_energy_semf(a, z)?;

    let separation = SeparationEnergies {
        neutron: optional(observables::separation_energy(a, z, Particle::Neutron))?,
        proton: optional(observables::separation_energy(a, z, Particle::Proton))?,
        alpha: optional(observables::separation_energy(a, z, Particle::Alpha))?,
        two_neutron: optional(observables::two_neutron_separation_energy(a, z))?,
    };
    let q_values = QValues {
        alpha: optional(decay::q_value_alpha_decay(a, z))?,
        beta_minus: optional(decay::q_value_beta_decay(a, z, DecayMode::BetaMinus))?,
        beta_plus: optional(decay::q_value_beta_decay(a, z, DecayMode::BetaPlus))?,
    };

    Ok(NuclideReport {
        nuclide,
        neutron_number: nuclide.neutron_number(),
        parity: nuclide.parity(),
        terms: semf::semf_terms(a, z)?,
        binding_energy,
        binding_energy_per_nucleon: binding_energy / a as f64,
        predicted_mass: semf::predict_mass(a, z)?,
        mass_excess: observables::mass_excess(a, z)?,
        liquid_drop_energy: semf::liquid_drop_energy(a, z)?,
        separation,
        q_values,
        magic: structure::is_magic_nucleus(a, z)?,
        doubly_magic: structure::is_doubly_magic(a, z)?,
        radius: structure::nuclear_radius(a)?,
        measured: None,
    })
}

/// Report for a measured nuclide, including the empirical comparison.
pub fn run_for_record(record: &NuclideRecord) -> Result<NuclideReport, EngineError> {
    let a = record.nuclide.mass_number();
    let z = record.nuclide.proton_number();
    let mut report = run(a, z)?;

    let measured = MeasuredComparison {
        name: record.name.clone(),
        measured_mass: record.mass,
        mass_residual: report.predicted_mass - record.mass.atomic_mass_u(),
        empirical_binding_energy: observables::binding_energy(a, record.mass)?,
        mass_defect: observables::mass_defect(a, record.mass)?,
    };
    info!(
        name = %record.name,
        residual = measured.mass_residual,
        "Compared SEMF prediction with measured mass."
    );
    report.measured = Some(measured);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::builtin::get_nuclear_data;

    #[test]
    fn report_collects_observables_of_oxygen16() {
        let report = run(16, 8).unwrap();
        assert_eq!(report.neutron_number, 8);
        assert_eq!(report.parity, Parity::EvenEven);
        assert!(report.magic);
        assert!(report.doubly_magic);
        assert_eq!(report.binding_energy, report.terms.total());
        assert_eq!(
            report.separation.neutron,
            Some(observables::separation_energy(16, 8, Particle::Neutron).unwrap())
        );
        assert!(report.q_values.alpha.unwrap() < 0.0);
        assert!(report.measured.is_none());
    }

    #[test]
    fn report_marks_out_of_domain_daughters_as_absent() {
        let report = run(1, 1).unwrap();
        assert_eq!(report.separation.neutron, None);
        assert_eq!(report.separation.alpha, None);
        assert_eq!(report.separation.two_neutron, None);
        assert!(report.separation.proton.is_some());
        assert_eq!(report.q_values.alpha, None);
        assert_eq!(report.q_values.beta_minus, None);
        assert!(report.q_values.beta_plus.is_some());
    }

    #[test]
    fn report_rejects_invalid_parent() {
        assert!(matches!(run(0, 0), Err(EngineError::Domain(_))));
        assert!(run(2, 3).is_err());
    }

    #[test]
    fn record_report_compares_with_measurement() {
        let record = get_nuclear_data("Fe-56").unwrap();
        let report = run_for_record(&record).unwrap();
        let measured = report.measured.expect("comparison should be present");
        assert_eq!(measured.name, "Fe-56");
        assert!((measured.mass_residual - (55.922_507 - 55.934_942)).abs() < 1e-5);
        assert!(measured.empirical_binding_energy > 400.0);
        assert!(measured.mass_defect > 0.0);
    }
}
