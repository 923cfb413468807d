//! Physical constants (CODATA 2018).
//!
//! Masses are given both in kilograms and as rest energies in MeV so that callers never
//! convert between the two themselves.

/// Proton rest mass (kg).
pub const PROTON_MASS_KG: f64 = 1.672_621_923_69e-27;
/// Neutron rest mass (kg).
pub const NEUTRON_MASS_KG: f64 = 1.674_927_498_04e-27;
/// Electron rest mass (kg).
pub const ELECTRON_MASS_KG: f64 = 9.109_383_701_5e-31;
/// Unified atomic mass unit (kg).
pub const ATOMIC_MASS_UNIT_KG: f64 = 1.660_539_066_60e-27;

/// Proton rest energy (MeV).
pub const PROTON_MASS_MEV: f64 = 938.272_088_16;
/// Neutron rest energy (MeV).
pub const NEUTRON_MASS_MEV: f64 = 939.565_420_52;
/// Electron rest energy (MeV).
pub const ELECTRON_MASS_MEV: f64 = 0.510_998_950;
/// Energy equivalent of one atomic mass unit (MeV).
pub const ATOMIC_MASS_UNIT_MEV: f64 = 931.494_102_42;

/// Elementary charge (C).
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// Coulomb's constant 1/(4πε₀) (N·m²/C²).
pub const COULOMB_CONSTANT: f64 = 8.987_551_792_3e9;
/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// One electronvolt in joules.
pub const ELECTRON_VOLT: f64 = 1.602_176_634e-19;

/// Nuclear radius parameter r₀ in R = r₀·A^(1/3) (fm).
pub const NUCLEAR_RADIUS_CONSTANT: f64 = 1.2;
/// One femtometre in metres.
pub const FEMTOMETRE: f64 = 1e-15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilogram_and_mev_masses_are_consistent() {
        let c2_over_mev = SPEED_OF_LIGHT * SPEED_OF_LIGHT / ELECTRON_VOLT / 1e6;
        for (kg, mev) in [
            (PROTON_MASS_KG, PROTON_MASS_MEV),
            (NEUTRON_MASS_KG, NEUTRON_MASS_MEV),
            (ELECTRON_MASS_KG, ELECTRON_MASS_MEV),
            (ATOMIC_MASS_UNIT_KG, ATOMIC_MASS_UNIT_MEV),
        ] {
            assert!((kg * c2_over_mev - mev).abs() / mev < 1e-8);
        }
    }

    #[test]
    fn neutron_is_heavier_than_proton() {
        assert!(NEUTRON_MASS_MEV > PROTON_MASS_MEV);
        assert!(NEUTRON_MASS_KG > PROTON_MASS_KG);
    }
}
