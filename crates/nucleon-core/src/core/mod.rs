//! # Core Module
//!
//! Stateless building blocks of the liquid-drop model.
//!
//! - **Constants** ([`constants`]) - CODATA 2018 particle masses and unit conversions
//! - **Models** ([`models`]) - The [`models::nuclide::Nuclide`] value type, nucleon parity,
//!   measured masses and the closed sets of emitted particles and decay modes
//! - **Model** ([`semf`]) - The five energy terms and the binding energy / atomic mass built from them
//! - **Data** ([`data`]) - Measured atomic masses of common nuclides, addressable by name
//!
//! The model functions take an already validated [`models::nuclide::Nuclide`] and
//! therefore cannot fail. Input validation lives in [`crate::engine`]; only reading a
//! mass table from disk can fail here.

pub mod constants;
pub mod data;
pub mod models;
pub mod semf;
