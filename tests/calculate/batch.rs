use crate::common::{client_for, emission_row, energy_row, setup_server, unreachable_client};
use httpmock::Method::POST;
use serde_json::json;
use vsme_rs::{
    Calculator, EmissionScope, EmissionStore, EnergyStore, EnergyUnit, Scope3Edit, Scope3Store,
    VsmeError,
};

#[tokio::test]
async fn one_failed_request_does_not_block_siblings() {
    let server = setup_server();
    let ok_gas = server.mock(|when, then| {
        when.method(POST)
            .path("/calculate/emissions")
            .json_body(json!({ "activity_type": "natural_gas", "quantity": 1000.0, "country": "UK" }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 183.0 }));
    });
    let ok_fleet = server.mock(|when, then| {
        when.method(POST)
            .path("/calculate/emissions")
            .json_body(json!({ "activity_type": "car_diesel", "quantity": 500.0, "country": "UK" }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 84.0 }));
    });
    let failing = server.mock(|when, then| {
        when.method(POST)
            .path("/calculate/emissions")
            .json_body(json!({ "activity_type": "refrigerants", "quantity": 2.0, "country": "UK" }));
        then.status(503);
    });

    let mut store = EmissionStore::new(2024);
    let gas = emission_row(&mut store, EmissionScope::Scope1, "natural_gas", 1000.0, None);
    let fleet = emission_row(&mut store, EmissionScope::Scope1, "car_diesel", 500.0, None);
    let leak = emission_row(&mut store, EmissionScope::Scope1, "refrigerants", 2.0, None);

    let client = client_for(&server);
    let report = Calculator::new(&client).emissions(&mut store).await;

    ok_gas.assert();
    ok_fleet.assert();
    failing.assert();

    assert_eq!(report.calculated.len(), 2);
    assert!(report.estimated.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, leak);
    assert!(matches!(report.failed[0].1, VsmeError::Status { status: 503, .. }));
    assert!(!report.is_complete());

    assert_eq!(store.get(&gas).unwrap().emissions_kg, Some(183.0));
    assert_eq!(store.get(&fleet).unwrap().emissions_kg, Some(84.0));
    assert!(store.get(&leak).unwrap().emissions_kg.is_none());
    assert_eq!(store.summary().scope1_kg, 267.0);
}

#[tokio::test]
async fn failed_row_keeps_its_previous_figure() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/calculate/emissions");
        then.status(500);
    });

    let mut store = EmissionStore::new(2024);
    let id = emission_row(&mut store, EmissionScope::Scope2Location, "electricity", 10.0, Some(2.07));

    let client = client_for(&server);
    let report = Calculator::new(&client).emissions(&mut store).await;

    assert_eq!(report.failed.len(), 1);
    assert_eq!(store.get(&id).unwrap().emissions_kg, Some(2.07));
}

#[tokio::test]
async fn energy_batch_uses_grid_factor_estimate_when_unreachable() {
    let mut store = EnergyStore::new(2024);
    let solar = energy_row(&mut store, "solar_pv", 800.0, EnergyUnit::KWh, "UK");
    let boiler = energy_row(&mut store, "natural_gas", 2.0, EnergyUnit::MWh, "UK");
    let mains = energy_row(&mut store, "electricity_grid", 1.5, EnergyUnit::MWh, "DE");

    let client = unreachable_client();
    let report = Calculator::new(&client).energy(&mut store).await;

    assert_eq!(report.calculated, vec![solar.clone()]);
    assert_eq!(report.estimated.len(), 2);
    assert!(report.estimated.contains(&boiler));
    assert!(report.estimated.contains(&mains));
    assert!(report.is_complete());
    assert_eq!(report.len(), 3);

    assert_eq!(store.get(&solar).unwrap().emissions_kg, Some(0.0));
    // 2000 kWh × 0.207
    assert_eq!(store.get(&boiler).unwrap().emissions_kg, Some(414.0));
    // 1500 kWh × 0.364
    assert_eq!(store.get(&mains).unwrap().emissions_kg, Some(546.0));
}

#[tokio::test]
async fn energy_batch_error_status_leaves_row_unset() {
    let server = setup_server();
    let gas = server.mock(|when, then| {
        when.method(POST)
            .path("/calculate/emissions")
            .json_body(json!({ "activity_type": "natural_gas", "quantity": 2000.0, "country": "UK" }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 366.0 }));
    });
    let grid = server.mock(|when, then| {
        when.method(POST)
            .path("/calculate/emissions")
            .json_body(json!({ "activity_type": "electricity", "quantity": 1500.0, "country": "DE" }));
        then.status(502);
    });
    let garbled = server.mock(|when, then| {
        when.method(POST)
            .path("/calculate/emissions")
            .json_body(json!({ "activity_type": "electricity", "quantity": 1000.0, "country": "FR" }));
        then.status(200).body("<html>gateway</html>");
    });

    let mut store = EnergyStore::new(2024);
    let boiler = energy_row(&mut store, "natural_gas", 2.0, EnergyUnit::MWh, "UK");
    let mains = energy_row(&mut store, "electricity_grid", 1.5, EnergyUnit::MWh, "DE");
    let paris = energy_row(&mut store, "electricity_grid", 1000.0, EnergyUnit::KWh, "FR");

    let client = client_for(&server);
    let report = Calculator::new(&client).energy(&mut store).await;

    gas.assert();
    grid.assert();
    garbled.assert();

    assert_eq!(report.calculated, vec![boiler.clone()]);
    assert_eq!(report.estimated, vec![paris.clone()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, mains);
    assert!(matches!(report.failed[0].1, VsmeError::Status { status: 502, .. }));

    assert_eq!(store.get(&boiler).unwrap().emissions_kg, Some(366.0));
    assert!(store.get(&mains).unwrap().emissions_kg.is_none());
    // 1000 kWh × 0.052
    assert_eq!(store.get(&paris).unwrap().emissions_kg, Some(52.0));
}

#[tokio::test]
async fn renewable_rows_need_no_request() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(POST).path("/calculate/emissions");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 1.0 }));
    });

    let mut store = EnergyStore::new(2024);
    let wind = energy_row(&mut store, "wind", 5000.0, EnergyUnit::KWh, "UK");

    let client = client_for(&server);
    let report = Calculator::new(&client).energy(&mut store).await;

    any.assert_hits(0);
    assert_eq!(report.calculated, vec![wind.clone()]);
    assert_eq!(store.get(&wind).unwrap().emissions_kg, Some(0.0));
}

#[tokio::test]
async fn scope3_batch_routes_by_method() {
    let server = setup_server();
    let spend = server.mock(|when, then| {
        when.method(POST).path("/calculate/spend").json_body(json!({
            "spend_amount": 12000.0,
            "category": "transport",
            "sub_category": "road_freight",
            "currency": "EUR"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 1800.0 }));
    });
    let travel = server.mock(|when, then| {
        when.method(POST).path("/calculate/emissions").json_body(json!({
            "activity_type": "flight_short",
            "quantity": 3000.0,
            "country": "DE"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 765.0 }));
    });

    let mut store = Scope3Store::new(2024);
    let freight = store.add(4);
    store.update(&freight, Scope3Edit::Quantity(12000.0));
    let flights = store.add(6);
    store.update(&flights, Scope3Edit::Quantity(3000.0));

    let client = client_for(&server);
    let report = Calculator::new(&client).country("DE").scope3(&mut store).await;

    spend.assert();
    travel.assert();
    assert!(report.is_complete());

    let s = store.summary();
    assert_eq!(s.total_kg, 2565.0);
    assert_eq!(s.by_category.len(), 2);
}

#[tokio::test]
async fn spend_rows_without_sub_category_send_defaults() {
    let server = setup_server();
    let spend = server.mock(|when, then| {
        when.method(POST).path("/calculate/spend").json_body(json!({
            "spend_amount": 100.0,
            "category": "capital_goods",
            "sub_category": "default",
            "currency": "EUR"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 40.0 }));
    });

    let mut store = Scope3Store::new(2024);
    let id = store.add(2);
    store.update(&id, Scope3Edit::Quantity(100.0));
    store.update(&id, Scope3Edit::SubCategory(None));
    store.update(&id, Scope3Edit::Currency(None));

    let client = client_for(&server);
    Calculator::new(&client).scope3(&mut store).await;

    spend.assert();
    assert_eq!(store.get(&id).unwrap().emissions_kg, Some(40.0));
}
