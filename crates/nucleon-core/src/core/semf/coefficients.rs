//! Fixed liquid-drop coefficients (MeV).

/// Volume term a_v.
pub const VOLUME: f64 = 15.75;
/// Surface term a_s.
pub const SURFACE: f64 = 17.8;
/// Coulomb term a_c.
pub const COULOMB: f64 = 0.711;
/// Asymmetry term a_A.
pub const ASYMMETRY: f64 = 23.7;
/// Pairing amplitude a_p, divided by √A in the pairing term.
pub const PAIRING: f64 = 11.18;
