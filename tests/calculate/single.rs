use crate::common::{client_for, setup_server};
use httpmock::Method::POST;
use serde_json::json;
use vsme_rs::{ActivityRequest, Calculator, SpendRequest, VsmeError};

#[tokio::test]
async fn activity_request_round_trip() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/calculate/emissions")
            .json_body(json!({
                "activity_type": "natural_gas",
                "quantity": 1000.0,
                "country": "UK"
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "emissions_kg_co2e": 183.0,
                "emissions_tonnes_co2e": 0.183,
                "emission_factor": 0.183,
                "unit": "kWh",
                "scope": "scope_1"
            }));
    });

    let client = client_for(&server);
    let calc = Calculator::new(&client)
        .activity(&ActivityRequest {
            activity_type: "natural_gas".into(),
            quantity: 1000.0,
            country: "UK".into(),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(calc.emissions_kg_co2e, 183.0);
    assert_eq!(calc.emission_factor, Some(0.183));
    assert_eq!(calc.scope.as_deref(), Some("scope_1"));
}

#[tokio::test]
async fn spend_request_round_trip() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/calculate/spend").json_body(json!({
            "spend_amount": 25000.0,
            "category": "purchased_goods",
            "sub_category": "electronics",
            "currency": "EUR"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "emissions_kg_co2e": 11250.0 }));
    });

    let client = client_for(&server);
    let calc = Calculator::new(&client)
        .spend(&SpendRequest {
            spend_amount: 25000.0,
            category: "purchased_goods".into(),
            sub_category: "electronics".into(),
            currency: "EUR".into(),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(calc.emissions_kg_co2e, 11250.0);
    assert!(calc.unit.is_none());
}

#[tokio::test]
async fn missing_figure_is_a_data_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/calculate/emissions");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "detail": "unknown activity" }));
    });

    let client = client_for(&server);
    let err = Calculator::new(&client)
        .activity(&ActivityRequest {
            activity_type: "teleport".into(),
            quantity: 1.0,
            country: "UK".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, VsmeError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_data_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/calculate/emissions");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = client_for(&server);
    let err = Calculator::new(&client)
        .activity(&ActivityRequest {
            activity_type: "electricity".into(),
            quantity: 10.0,
            country: "UK".into(),
        })
        .await
        .unwrap_err();

    match err {
        VsmeError::Data(msg) => assert!(msg.contains("calculate_emissions"), "got {msg}"),
        other => panic!("expected Data, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_a_status_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/calculate/spend");
        then.status(500).body("boom");
    });

    let client = client_for(&server);
    let err = Calculator::new(&client)
        .spend(&SpendRequest {
            spend_amount: 1.0,
            category: "transport".into(),
            sub_category: "courier".into(),
            currency: "EUR".into(),
        })
        .await
        .unwrap_err();

    match err {
        VsmeError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/calculate/spend"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}
