use crate::cli::{DripArgs, DripSide};
use crate::error::Result;
use crate::output::{Lines, TextRender};
use nucleon::engine::stability::{DRIP_LINE_CEILING, neutron_drip_line, proton_drip_line};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct DripOutput {
    pub proton_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutron: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proton: Option<u32>,
}

pub fn run(args: &DripArgs) -> Result<DripOutput> {
    let z = args.proton_number;
    let neutron = match args.side {
        DripSide::Neutron | DripSide::Both => Some(neutron_drip_line(z)?),
        DripSide::Proton => None,
    };
    let proton = match args.side {
        DripSide::Proton | DripSide::Both => Some(proton_drip_line(z)?),
        DripSide::Neutron => None,
    };

    if [neutron, proton].contains(&Some(DRIP_LINE_CEILING)) {
        warn!(
            "No drip line found below A = {} for Z = {}; the ceiling is reported instead.",
            DRIP_LINE_CEILING, z
        );
    }
    Ok(DripOutput {
        proton_number: z,
        neutron,
        proton,
    })
}

impl TextRender for DripOutput {
    fn render_text(&self, _precision: usize) -> String {
        let mut lines = Lines::new();
        lines.heading(&format!("Drip lines of Z = {}", self.proton_number));
        if let Some(a) = self.neutron {
            lines.field("Neutron drip line", format!("A = {}", a), "");
        }
        if let Some(a) = self.proton {
            lines.field("Proton drip line", format!("A = {}", a), "");
        }
        lines.finish()
    }
}
