//! # Engine Module
//!
//! The checked `(A, Z)` calculators built on the liquid-drop model in [`crate::core`].
//!
//! ## Architecture
//!
//! - **Model** ([`semf`]) - Binding energy, predicted mass and the term decomposition
//! - **Derived Observables** ([`observables`]) - Separation energies, mass excess, and the
//!   empirical binding energy / mass defect of measured masses
//! - **Decay Kinematics** ([`decay`]) - Alpha and beta Q-values
//! - **Structure** ([`structure`]) - Magic numbers, nuclear radius and density
//! - **Stability Search** ([`stability`]) - Valley of stability and drip lines
//! - **Configuration** ([`config`]) - Survey parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting for long scans
//! - **Error Handling** ([`error`]) - The error type every calculator returns
//!
//! Every function here is pure: no shared state, no I/O, safe to call from any thread.
//! Domain violations and non-finite intermediate results surface as
//! [`error::EngineError`] rather than as NaN or infinity.

pub mod config;
pub mod decay;
pub mod error;
pub mod observables;
pub mod progress;
pub mod semf;
pub mod stability;
pub mod structure;
