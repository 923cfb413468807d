pub mod curve;
pub mod decay;
pub mod drip;
pub mod inspect;
pub mod lookup;
pub mod separation;
pub mod valley;

use crate::error::Result;
use nucleon::core::data::table::NuclideTable;
use std::path::Path;
use tracing::info;

/// The built-in nuclide table, extended from `data` when given.
fn load_table(data: Option<&Path>) -> Result<NuclideTable> {
    let mut table = NuclideTable::builtin()?;
    if let Some(path) = data {
        let added = table.extend_from_csv(path)?;
        info!(
            "Loaded {} record(s) from {:?}; table now holds {}.",
            added,
            path,
            table.len()
        );
    }
    Ok(table)
}
