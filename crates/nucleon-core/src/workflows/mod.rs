//! # Workflows Module
//!
//! Complete procedures assembled from the [`crate::engine`] calculators.
//!
//! - **Nuclide Report** ([`report`]) - Every observable of one nucleus, optionally compared
//!   against a measured mass
//! - **Stability Survey** ([`survey`]) - The valley of stability over a range of mass numbers,
//!   with progress reporting
//! - **Binding Curve** ([`curve`]) - Binding energy per nucleon along the legacy
//!   approximate-Z path, the data behind the classic binding-energy curve

pub mod curve;
pub mod report;
pub mod survey;
