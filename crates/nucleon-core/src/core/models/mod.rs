//! # Core Models Module
//!
//! Value types describing a nucleus and the processes that change it.
//!
//! - [`nuclide`] - The validated `(A, Z)` pair and its nucleon-number parity
//! - [`mass`] - Measured atomic masses, kept apart from model predictions
//! - [`channel`] - Emitted particles for separation energies and beta-decay modes
//!
//! ```
//! use nucleon::core::models::nuclide::{Nuclide, Parity};
//!
//! let iron = Nuclide::new(56, 26).unwrap();
//! assert_eq!(iron.neutron_number(), 30);
//! assert_eq!(iron.parity(), Parity::EvenEven);
//! assert!(Nuclide::new(4, 5).is_err());
//! ```

pub mod channel;
pub mod mass;
pub mod nuclide;
