use crate::common::{client_for, setup_server};
use httpmock::Method::GET;
use std::time::Duration;
use url::Url;
use vsme_rs::{Backoff, ReportBuilder, RetryConfig, VsmeClient, VsmeError};

fn quick_retries(max_retries: u32) -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    }
}

#[tokio::test]
async fn no_retries_by_default() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/report/2024");
        then.status(503);
    });

    let client = client_for(&server);
    let err = ReportBuilder::new(&client, 2024).fetch().await.unwrap_err();

    assert!(matches!(err, VsmeError::Status { status: 503, .. }));
    mock.assert_hits(1);
}

#[tokio::test]
async fn client_policy_retries_listed_statuses() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/report/2024");
        then.status(503);
    });

    let client = VsmeClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(quick_retries(2))
        .build()
        .unwrap();
    let err = ReportBuilder::new(&client, 2024).fetch().await.unwrap_err();

    assert!(matches!(err, VsmeError::Status { status: 503, .. }));
    mock.assert_hits(3);
}

#[tokio::test]
async fn per_call_override_wins_and_skips_unlisted_statuses() {
    let server = setup_server();
    let retried = server.mock(|when, then| {
        when.method(GET).path("/report/2024");
        then.status(429);
    });
    let not_retried = server.mock(|when, then| {
        when.method(GET).path("/report/2023");
        then.status(404);
    });

    let client = client_for(&server);

    let _ = ReportBuilder::new(&client, 2024)
        .retry_policy(Some(quick_retries(1)))
        .fetch()
        .await;
    retried.assert_hits(2);

    let _ = ReportBuilder::new(&client, 2023)
        .retry_policy(Some(quick_retries(3)))
        .fetch()
        .await;
    not_retried.assert_hits(1);
}

#[test]
fn exponential_backoff_is_capped() {
    let b = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 2.0,
        max: Duration::from_millis(500),
    };
    assert_eq!(b.delay(0), Duration::from_millis(100));
    assert_eq!(b.delay(2), Duration::from_millis(400));
    assert_eq!(b.delay(3), Duration::from_millis(500));
    assert_eq!(b.delay(60), Duration::from_millis(500));
}
