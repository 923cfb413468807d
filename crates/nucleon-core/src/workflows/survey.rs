use crate::engine::config::SurveyConfig;
use crate::engine::error::EngineError;
use crate::engine::observables;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::semf;
use crate::engine::stability::{self, DRIP_LINE_CEILING, most_stable_proton_number};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The most stable isobar of one mass number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurveyRow {
    pub mass_number: u32,
    pub proton_number: u32,
    pub neutron_number: u32,
    pub binding_energy_per_nucleon: f64,
    pub mass_excess: f64,
    /// Neutron and proton drip lines of the row's element, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drip_lines: Option<DripLines>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DripLines {
    pub neutron: u32,
    pub proton: u32,
}

fn survey_row(a: u32, include_drip_lines: bool) -> Result<SurveyRow, EngineError> {
    let z = most_stable_proton_number(a)?;
    let drip_lines = if include_drip_lines {
        Some(DripLines {
            neutron: stability::neutron_drip_line(z)?,
            proton: stability::proton_drip_line(z)?,
        })
    } else {
        None
    };
    Ok(SurveyRow {
        mass_number: a,
        proton_number: z,
        neutron_number: a - z,
        binding_energy_per_nucleon: semf::binding_energy_per_nucleon_semf(a, z)?,
        mass_excess: observables::mass_excess(a, z)?,
        drip_lines,
    })
}

/// Walks the valley of stability over the configured mass range.
///
/// Rows come back ordered by mass number. One [`Progress::ScanStep`] is reported per
/// mass number; under the `parallel` feature those steps may arrive out of order.
#[instrument(skip_all, name = "survey_workflow")]
pub fn run(
    config: &SurveyConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<SurveyRow>, EngineError> {
    let range = config.mass_range;
    info!(
        a_min = range.min,
        a_max = range.max,
        drip_lines = config.include_drip_lines,
        "Starting stability survey."
    );
    reporter.report(Progress::PhaseStart {
        name: "Valley of Stability",
    });
    reporter.report(Progress::ScanStart {
        total_steps: range.count() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = range.iter();

    #[cfg(feature = "parallel")]
    let iterator = range.iter().into_par_iter();

    let rows = iterator
        .map(|a| {
            let row = survey_row(a, config.include_drip_lines);
            reporter.report(Progress::ScanStep { mass_number: a });
            row
        })
        .collect::<Result<Vec<_>, _>>()?;

    reporter.report(Progress::ScanFinish);

    let unbounded: BTreeSet<u32> = rows
        .iter()
        .filter(|row| {
            row.drip_lines.is_some_and(|drip| {
                drip.neutron == DRIP_LINE_CEILING || drip.proton == DRIP_LINE_CEILING
            })
        })
        .map(|row| row.proton_number)
        .collect();
    for z in unbounded {
        reporter.report(Progress::Message(format!(
            "Z = {}: no drip line below A = {}, ceiling reported.",
            z, DRIP_LINE_CEILING
        )));
    }

    reporter.report(Progress::PhaseFinish);
    info!(rows = rows.len(), "Stability survey finished.");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::SurveyConfigBuilder;
    use std::sync::Mutex;

    fn config(a_min: u32, a_max: u32, drip: bool) -> SurveyConfig {
        SurveyConfigBuilder::new()
            .a_min(a_min)
            .a_max(a_max)
            .include_drip_lines(drip)
            .build()
            .unwrap()
    }

    #[test]
    fn survey_rows_follow_valley_of_stability() {
        let rows = run(&config(1, 60, false), &ProgressReporter::new()).unwrap();
        let valley = stability::valley_of_stability(1, 60).unwrap();

        assert_eq!(rows.len(), 60);
        for (row, z) in rows.iter().zip(valley) {
            assert_eq!(row.proton_number, z);
            assert_eq!(row.neutron_number, row.mass_number - z);
            assert!(row.drip_lines.is_none());
        }
        assert_eq!(rows[55].mass_number, 56);
        assert_eq!(rows[55].proton_number, 26);
    }

    #[test]
    fn survey_reports_one_step_per_mass_number() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        run(&config(10, 19, false), &reporter).unwrap();
        drop(reporter);
        let events = events.into_inner().unwrap();

        let steps = events
            .iter()
            .filter(|e| matches!(e, Progress::ScanStep { .. }))
            .count();
        assert_eq!(steps, 10);
        assert!(matches!(events[0], Progress::PhaseStart { .. }));
        assert!(matches!(events[1], Progress::ScanStart { total_steps: 10 }));
        assert!(matches!(events.last(), Some(Progress::PhaseFinish)));
    }

    #[test]
    fn survey_reports_drip_lines_stuck_at_the_ceiling() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(msg) = event {
                events.lock().unwrap().push(msg);
            }
        }));

        let rows = run(&config(238, 240, true), &reporter).unwrap();
        drop(reporter);
        let messages = events.into_inner().unwrap();

        assert_eq!(rows[0].proton_number, 94);
        assert_eq!(rows[0].drip_lines.unwrap().neutron, DRIP_LINE_CEILING);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Z = 94:"));
    }

    #[test]
    fn survey_without_drip_lines_sends_no_messages() {
        let messages = Mutex::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if matches!(event, Progress::Message(_)) {
                *messages.lock().unwrap() += 1;
            }
        }));
        run(&config(238, 240, false), &reporter).unwrap();
        drop(reporter);
        assert_eq!(messages.into_inner().unwrap(), 0);
    }

    #[test]
    fn survey_can_attach_drip_lines() {
        let rows = run(&config(16, 16, true), &ProgressReporter::new()).unwrap();
        let drip = rows[0].drip_lines.expect("drip lines requested");
        assert_eq!(drip.neutron, 20);
        assert_eq!(drip.proton, 7);
    }
}
