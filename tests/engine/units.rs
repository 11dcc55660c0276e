use vsme_rs::core::conversions::{percentage, safe_ratio, weighted_mean};
use vsme_rs::core::units::{normalize_energy, normalize_water};
use vsme_rs::{EnergyUnit, WaterUnit};

#[test]
fn energy_units_normalize_to_kwh() {
    assert_eq!(
        normalize_energy(1000.0, EnergyUnit::KWh),
        normalize_energy(1.0, EnergyUnit::MWh)
    );

    let gj = normalize_energy(3.6, EnergyUnit::GJ);
    let kwh = normalize_energy(1000.0, EnergyUnit::KWh);
    assert!((gj - kwh).abs() < 0.01, "3.6 GJ ≈ 1000 kWh, got {gj}");
}

#[test]
fn water_units_normalize_to_m3() {
    assert_eq!(normalize_water(2500.0, WaterUnit::Liters), 2.5);
    assert!((normalize_water(1000.0, WaterUnit::Gallons) - 3.785_41).abs() < 1e-9);
    assert_eq!(normalize_water(42.0, WaterUnit::M3), 42.0);
}

#[test]
fn unknown_units_pass_through() {
    let energy: EnergyUnit = serde_json::from_str("\"therms\"").unwrap();
    assert_eq!(energy, EnergyUnit::Unknown("therms".into()));
    assert_eq!(energy.to_kwh(12.0), 12.0);

    let water: WaterUnit = serde_json::from_str("\"barrels\"").unwrap();
    assert_eq!(water, WaterUnit::Unknown("barrels".into()));
    assert_eq!(water.to_m3(7.0), 7.0);
}

#[test]
fn unknown_unit_labels_survive_a_round_trip() {
    let energy: EnergyUnit = serde_json::from_str("\"TJ\"").unwrap();
    assert_eq!(serde_json::to_string(&energy).unwrap(), "\"TJ\"");
    assert_eq!(energy.to_string(), "TJ");

    let water: WaterUnit = serde_json::from_str("\"acre-feet\"").unwrap();
    assert_eq!(serde_json::to_string(&water).unwrap(), "\"acre-feet\"");

    let known: EnergyUnit = serde_json::from_str("\"MWh\"").unwrap();
    assert_eq!(known, EnergyUnit::MWh);
}

#[test]
fn unit_labels_match_wire_format() {
    assert_eq!(serde_json::to_string(&EnergyUnit::MWh).unwrap(), "\"MWh\"");
    assert_eq!(serde_json::to_string(&WaterUnit::M3).unwrap(), "\"m3\"");
    assert_eq!(EnergyUnit::GJ.to_string(), "GJ");
    assert_eq!(WaterUnit::Liters.to_string(), "liters");
}

#[test]
fn ratios_are_zero_safe() {
    assert_eq!(safe_ratio(5.0, 0.0), 0.0);
    assert_eq!(percentage(1.0, 0.0), 0.0);
    assert_eq!(percentage(1.0, 4.0), 25.0);
    assert_eq!(weighted_mean(std::iter::empty::<(f64, f64)>()), 0.0);
    assert_eq!(weighted_mean([(10.0, 0.0), (20.0, 0.0)]), 0.0);
    assert_eq!(weighted_mean([(10.0, 1.0), (20.0, 3.0)]), 17.5);
}
