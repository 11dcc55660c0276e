use serde::Serialize;

use crate::{
    core::{RetryConfig, VsmeClient, VsmeError, net},
    report::model::{EsgReport, UpdateAck},
};

pub(super) async fn get_report(
    client: &VsmeClient,
    year: i32,
    retry_override: Option<&RetryConfig>,
) -> Result<EsgReport, VsmeError> {
    let url = client.endpoint(&format!("report/{year}"))?;
    let resp = client
        .send_with_retry(client.http().get(url), retry_override)
        .await?;
    net::get_json(resp, "report", &year.to_string()).await
}

pub(super) async fn post_report(
    client: &VsmeClient,
    report: &EsgReport,
    retry_override: Option<&RetryConfig>,
) -> Result<EsgReport, VsmeError> {
    let year = report.reporting_year;
    let url = client.endpoint(&format!("report/{year}"))?;
    let resp = client
        .send_with_retry(client.http().post(url).json(report), retry_override)
        .await?;
    net::get_json(resp, "report_save", &year.to_string()).await
}

pub(super) async fn put_section<T: Serialize + ?Sized>(
    client: &VsmeClient,
    year: i32,
    section: &str,
    body: &T,
    retry_override: Option<&RetryConfig>,
) -> Result<UpdateAck, VsmeError> {
    let url = client.endpoint(&format!("report/{year}/{section}"))?;
    let resp = client
        .send_with_retry(client.http().put(url).json(body), retry_override)
        .await?;
    net::get_json(resp, section, &year.to_string()).await
}

pub(super) async fn get_xbrl(
    client: &VsmeClient,
    year: i32,
    retry_override: Option<&RetryConfig>,
) -> Result<serde_json::Value, VsmeError> {
    let url = client.endpoint(&format!("export/{year}/xbrl"))?;
    let resp = client
        .send_with_retry(client.http().get(url), retry_override)
        .await?;
    net::get_json(resp, "export_xbrl", &year.to_string()).await
}

pub(super) async fn get_years(
    client: &VsmeClient,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<i32>, VsmeError> {
    let url = client.endpoint("reports")?;
    let resp = client
        .send_with_retry(client.http().get(url), retry_override)
        .await?;
    net::get_json(resp, "reports", "all").await
}
