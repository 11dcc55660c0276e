use crate::common::energy_row;
use vsme_rs::{
    EmissionEdit, EmissionScope, EmissionStore, EnergyEdit, EnergyStore, EnergyType, EnergyUnit,
    EntryId, Scope3Edit, Scope3Method, Scope3Store, WaterEdit, WaterStore, WorkforceCount,
    WorkforceEdit, WorkforceStore,
};

#[test]
fn add_generates_unique_ids_in_order() {
    let mut store = EnergyStore::new(2024);
    let ids: Vec<EntryId> = (0..50).map(|_| store.add(())).collect();

    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 50);

    let stored: Vec<&EntryId> = store.iter().map(|e| &e.id).collect();
    assert_eq!(stored, ids.iter().collect::<Vec<_>>());
}

#[test]
fn new_energy_entry_uses_catalog_defaults() {
    let mut store = EnergyStore::new(2023);
    let id = store.add(());
    let e = store.get(&id).unwrap();

    assert_eq!(e.source, "electricity_grid");
    assert_eq!(e.energy_type, EnergyType::NonRenewable);
    assert_eq!(e.unit, EnergyUnit::KWh);
    assert_eq!(e.country, "UK");
    assert_eq!(e.period, "2023");
    assert_eq!(e.quantity, 0.0);
    assert!(e.emissions_kg.is_none());
}

#[test]
fn removing_unknown_id_is_a_noop() {
    let mut store = WaterStore::new(2024);
    let a = store.add(());
    let b = store.add(());
    let c = store.add(());

    store.remove(&EntryId::new("missing"));
    assert_eq!(store.len(), 3);

    store.remove(&b);
    let left: Vec<&EntryId> = store.iter().map(|e| &e.id).collect();
    assert_eq!(left, vec![&a, &c]);

    store.remove(&b);
    assert_eq!(store.len(), 2);
}

#[test]
fn updating_unknown_id_is_a_noop() {
    let mut store = EnergyStore::new(2024);
    let id = store.add(());
    let before = store.entries().to_vec();

    store.update(&EntryId::new("missing"), EnergyEdit::Quantity(10.0));
    assert_eq!(store.entries(), before.as_slice());
    assert!(store.contains(&id));
}

#[test]
fn insert_rejects_duplicate_ids() {
    let mut store = EnergyStore::new(2024);
    let id = store.add(());
    let copy = store.get(&id).unwrap().clone();

    assert!(!store.insert(copy));
    assert_eq!(store.len(), 1);
}

#[test]
fn energy_quantity_edit_clears_emissions() {
    let mut store = EnergyStore::new(2024);
    let id = store.add(());
    store.update(&id, EnergyEdit::Emissions(Some(123.0)));
    assert_eq!(store.get(&id).unwrap().emissions_kg, Some(123.0));

    store.update(&id, EnergyEdit::Quantity(500.0));
    let e = store.get(&id).unwrap();
    assert_eq!(e.quantity, 500.0);
    assert!(e.emissions_kg.is_none());
}

#[test]
fn energy_input_edits_clear_emissions_but_period_does_not() {
    let mut store = EnergyStore::new(2024);
    let id = store.add(());

    let edits = [
        EnergyEdit::Source("natural_gas".into()),
        EnergyEdit::Unit(EnergyUnit::MWh),
        EnergyEdit::Country("DE".into()),
    ];
    for edit in edits {
        store.update(&id, EnergyEdit::Emissions(Some(1.0)));
        store.update(&id, edit);
        assert!(store.get(&id).unwrap().emissions_kg.is_none());
    }

    store.update(&id, EnergyEdit::Emissions(Some(1.0)));
    store.update(&id, EnergyEdit::Period("2024-Q1".into()));
    assert_eq!(store.get(&id).unwrap().emissions_kg, Some(1.0));
}

#[test]
fn energy_source_edit_rederives_type() {
    let mut store = EnergyStore::new(2024);
    let id = energy_row(&mut store, "solar_pv", 10.0, EnergyUnit::KWh, "UK");
    assert_eq!(store.get(&id).unwrap().energy_type, EnergyType::Renewable);

    store.update(&id, EnergyEdit::Source("heating_oil".into()));
    assert_eq!(store.get(&id).unwrap().energy_type, EnergyType::NonRenewable);
}

#[test]
fn negative_quantities_are_stored_as_zero() {
    let mut store = EnergyStore::new(2024);
    let id = store.add(());
    store.update(&id, EnergyEdit::Quantity(-5.0));
    assert_eq!(store.get(&id).unwrap().quantity, 0.0);

    store.update(&id, EnergyEdit::Quantity(f64::NAN));
    assert_eq!(store.get(&id).unwrap().quantity, 0.0);
}

#[test]
fn emission_activity_edit_rederives_unit_and_clears_emissions() {
    let mut store = EmissionStore::new(2024);
    let id = store.add(EmissionScope::Scope1);
    {
        let e = store.get(&id).unwrap();
        assert_eq!(e.category, "stationary_combustion");
        assert_eq!(e.activity_type, "natural_gas");
        assert_eq!(e.unit, "kWh");
    }

    store.update(&id, EmissionEdit::Emissions(Some(50.0)));
    store.update(&id, EmissionEdit::ActivityType("refrigerants".into()));
    let e = store.get(&id).unwrap();
    assert_eq!(e.unit, "kg");
    assert!(e.emissions_kg.is_none());
}

#[test]
fn emission_category_edit_keeps_activity() {
    let mut store = EmissionStore::new(2024);
    let id = store.add(EmissionScope::Scope1);
    store.update(&id, EmissionEdit::Emissions(Some(50.0)));
    store.update(&id, EmissionEdit::Category("mobile_combustion".into()));

    let e = store.get(&id).unwrap();
    assert_eq!(e.category, "mobile_combustion");
    assert_eq!(e.activity_type, "natural_gas");
    assert_eq!(e.emissions_kg, Some(50.0));
}

#[test]
fn emission_quantity_edit_clears_emissions() {
    let mut store = EmissionStore::new(2024);
    let id = store.add(EmissionScope::Scope2Location);
    assert_eq!(store.get(&id).unwrap().activity_type, "electricity");

    store.update(&id, EmissionEdit::Emissions(Some(9.0)));
    store.update(&id, EmissionEdit::Notes("meter 4".into()));
    assert_eq!(store.get(&id).unwrap().emissions_kg, Some(9.0));

    store.update(&id, EmissionEdit::Quantity(12.0));
    assert!(store.get(&id).unwrap().emissions_kg.is_none());
}

#[test]
fn scope3_method_switch_to_spend_populates_spend_fields() {
    let mut store = Scope3Store::new(2024);
    let id = store.add(4);
    store.update(&id, Scope3Edit::Method(Scope3Method::Activity));
    {
        let e = store.get(&id).unwrap();
        assert_eq!(e.activity_type, "truck");
        assert_eq!(e.unit, "tonne-km");
        assert!(e.sub_category.is_none());
        assert!(e.currency.is_none());
    }

    store.update(&id, Scope3Edit::Emissions(Some(10.0)));
    store.update(&id, Scope3Edit::Method(Scope3Method::Spend));
    let e = store.get(&id).unwrap();
    assert_eq!(e.method, Scope3Method::Spend);
    assert_eq!(e.sub_category.as_deref(), Some("road_freight"));
    assert_eq!(e.unit, "EUR");
    assert_eq!(e.currency.as_deref(), Some("EUR"));
    assert_eq!(e.activity_type, vsme_rs::scope3::SPEND_ACTIVITY);
    assert!(e.emissions_kg.is_none());
}

#[test]
fn scope3_activity_edit_rederives_unit_only_for_activity_method() {
    let mut store = Scope3Store::new(2024);
    let id = store.add(6);
    assert_eq!(store.get(&id).unwrap().method, Scope3Method::Activity);

    store.update(&id, Scope3Edit::ActivityType("car_petrol".into()));
    assert_eq!(store.get(&id).unwrap().unit, "km");

    let spend = store.add(1);
    store.update(&spend, Scope3Edit::Emissions(Some(3.0)));
    store.update(&spend, Scope3Edit::ActivityType("car_petrol".into()));
    let e = store.get(&spend).unwrap();
    assert_eq!(e.unit, "EUR");
    assert!(e.emissions_kg.is_none());
}

#[test]
fn scope3_sub_category_edit_clears_emissions_currency_does_not() {
    let mut store = Scope3Store::new(2024);
    let id = store.add(1);

    store.update(&id, Scope3Edit::Emissions(Some(3.0)));
    store.update(&id, Scope3Edit::Currency(Some("GBP".into())));
    assert_eq!(store.get(&id).unwrap().emissions_kg, Some(3.0));

    store.update(&id, Scope3Edit::SubCategory(Some("electronics".into())));
    assert!(store.get(&id).unwrap().emissions_kg.is_none());
}

#[test]
fn water_and_workforce_edits_are_plain_replacement() {
    let mut water = WaterStore::new(2024);
    let w = water.add(());
    water.update(&w, WaterEdit::Withdrawal(100.0));
    water.update(&w, WaterEdit::Discharge(250.0));
    let e = water.get(&w).unwrap();
    assert_eq!(e.withdrawal, 100.0);
    assert_eq!(e.discharge, 250.0);

    let mut workforce = WorkforceStore::new(2024);
    let p = workforce.add(());
    workforce.update(&p, WorkforceEdit::Count(WorkforceCount::TotalHeadcount, 10));
    workforce.update(&p, WorkforceEdit::Count(WorkforceCount::Female, 25));
    let e = workforce.get(&p).unwrap();
    assert_eq!(e.total_headcount, 10);
    assert_eq!(e.female, 25);
}
