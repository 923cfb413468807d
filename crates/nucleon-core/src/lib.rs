//! # nucleon
//!
//! Nuclear-structure observables computed from the semi-empirical mass formula (SEMF):
//! binding energies, atomic masses, nucleon and alpha separation energies, decay
//! Q-values, magic-number classification and stability searches.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout.
//!
//! - **[`core`]: The Foundation.** Physical constants, the validated [`core::models::nuclide::Nuclide`]
//!   value type, the five-term liquid-drop model itself and the table of measured masses.
//!   The model itself is infallible once a nuclide has been constructed.
//!
//! - **[`engine`]: The Calculators.** The public `(A, Z)` API. Every function validates its
//!   inputs, evaluates the model through `core`, and turns domain violations or non-finite
//!   results into an [`engine::error::EngineError`] instead of a silent NaN.
//!
//! - **[`workflows`]: The Procedures.** Aggregate reports for a single nuclide, surveys of the
//!   valley of stability over a range of mass numbers, and the binding-energy curve series.
//!
//! ```
//! use nucleon::engine::{decay, semf};
//! use nucleon::core::models::channel::DecayMode;
//!
//! let be = semf::binding_energy_semf(56, 26).unwrap();
//! assert!(be / 56.0 > 8.0);
//!
//! let q = decay::q_value_beta_decay(22, 11, DecayMode::BetaPlus).unwrap();
//! assert!(q > 0.0);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
