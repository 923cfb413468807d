use nucleon::engine::error::EngineError;
use nucleon::engine::semf::predict_mass;
use nucleon::engine::stability::{
    DRIP_LINE_CEILING, neutron_drip_line, proton_drip_line, valley_of_stability,
};

fn exhaustive_minimum(a: u32) -> u32 {
    let mut best = (1, f64::INFINITY);
    for z in 1..a {
        let mass = predict_mass(a, z).unwrap();
        if mass < best.1 {
            best = (z, mass);
        }
    }
    best.0
}

#[test]
fn single_mass_valley_equals_exhaustive_minimum() {
    for a in [1, 2, 3, 4, 16, 40, 56, 120, 208, 238] {
        assert_eq!(valley_of_stability(a, a).unwrap(), vec![exhaustive_minimum(a)]);
    }
}

#[test]
fn valley_is_indexed_from_the_lower_bound() {
    let valley = valley_of_stability(50, 60).unwrap();
    assert_eq!(valley.len(), 11);
    assert_eq!(valley[6], 26);
}

#[test]
fn valley_rejects_empty_or_inverted_ranges() {
    assert!(matches!(
        valley_of_stability(0, 5),
        Err(EngineError::InvalidRange { .. })
    ));
    assert!(matches!(
        valley_of_stability(9, 3),
        Err(EngineError::InvalidRange { .. })
    ));
}

#[test]
fn neutron_drip_line_is_non_decreasing() {
    let mut previous = 0;
    for z in 1..=60 {
        let drip = neutron_drip_line(z).unwrap();
        assert!(drip >= previous, "Z={z}: {drip} < {previous}");
        assert!(drip <= DRIP_LINE_CEILING);
        previous = drip;
    }
}

#[test]
fn drip_lines_match_reference_values() {
    assert_eq!(neutron_drip_line(8).unwrap(), 20);
    assert_eq!(neutron_drip_line(26).unwrap(), 74);
    assert_eq!(proton_drip_line(26).unwrap(), 25);
    assert!(matches!(
        proton_drip_line(0),
        Err(EngineError::InvalidProtonNumber(0))
    ));
}
