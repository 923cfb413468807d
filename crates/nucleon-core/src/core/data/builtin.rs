use super::{DataError, NuclideRecord};
use phf::{Map, phf_map};

/// `(A, Z, measured atomic mass in u)`.
pub type MassEntry = (u32, u32, f64);

#[rustfmt::skip]
pub static NUCLEAR_DATA: Map<&'static str, MassEntry> = phf_map! {
    // --- Hydrogen ---
    "H-1"   => (1, 1, 1.007825),
    "H-2"   => (2, 1, 2.014102),
    "H-3"   => (3, 1, 3.016049),

    // --- Light nuclei ---
    "He-3"  => (3, 2, 3.016029),
    "He-4"  => (4, 2, 4.002603),
    "Li-6"  => (6, 3, 6.015122),
    "Li-7"  => (7, 3, 7.016004),
    "C-12"  => (12, 6, 12.000000),
    "N-14"  => (14, 7, 14.003074),
    "O-16"  => (16, 8, 15.994915),

    // --- Iron peak ---
    "Fe-56" => (56, 26, 55.934942),

    // --- Actinides ---
    "U-235" => (235, 92, 235.043930),
    "U-238" => (238, 92, 238.050788),
};

/// Names in the built-in table, sorted.
pub fn available_names() -> Vec<&'static str> {
    let mut names: Vec<_> = NUCLEAR_DATA.keys().copied().collect();
    names.sort_unstable();
    names
}

pub fn get_nuclear_data(name: &str) -> Result<NuclideRecord, DataError> {
    match NUCLEAR_DATA.get(name) {
        Some(&(a, z, mass)) => NuclideRecord::new(name, a, z, mass),
        None => Err(DataError::NotFound {
            name: name.to_string(),
            available: available_names().join(", "),
        }),
    }
}
