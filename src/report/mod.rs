//! Yearly ESG report: composition, dashboard figures and persistence.

mod api;
mod compose;
mod dashboard;
mod model;

pub use compose::{
    ACTIVITY_METHODOLOGY, ReportComposer, emission_record, employee_record, energy_record,
    scope3_record, water_record,
};
pub use dashboard::{DashboardSummary, ScopeSplit};
pub use model::{
    EmployeeMetrics, EnergyConsumption, EsgReport, GhgEmissions, ReportScope, Scope3Category,
    UpdateAck, WaterUsage,
};

use crate::core::{RetryConfig, VsmeClient, VsmeError};
use crate::emissions::EmissionEntry;
use crate::energy::EnergyEntry;

/// Lists the years the API holds a report for.
///
/// # Errors
///
/// Returns `VsmeError` if the request fails or the response is not a list of years.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn available_years(client: &VsmeClient) -> Result<Vec<i32>, VsmeError> {
    api::get_years(client, None).await
}

/// Reads and writes one year's report.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    client: VsmeClient,
    year: i32,
    retry_override: Option<RetryConfig>,
}

impl ReportBuilder {
    pub fn new(client: &VsmeClient, year: i32) -> Self {
        Self {
            client: client.clone(),
            year,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this builder's requests.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// `GET /report/{year}`.
    ///
    /// # Errors
    ///
    /// Returns `VsmeError::Status` for a non-2xx answer and `VsmeError::Data` for a
    /// body that is not a report.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(year = self.year)))]
    pub async fn fetch(&self) -> Result<EsgReport, VsmeError> {
        api::get_report(&self.client, self.year, self.retry_override.as_ref()).await
    }

    /// `POST /report/{year}`; returns the report as stored.
    ///
    /// # Errors
    ///
    /// Returns `VsmeError::InvalidParams` without sending anything if
    /// `report.reporting_year` differs from this builder's year. Otherwise as
    /// [`ReportBuilder::fetch`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err, fields(year = self.year)))]
    pub async fn save(&self, report: &EsgReport) -> Result<EsgReport, VsmeError> {
        if report.reporting_year != self.year {
            return Err(VsmeError::InvalidParams(format!(
                "report is for {} but builder targets {}",
                report.reporting_year, self.year
            )));
        }
        api::post_report(&self.client, report, self.retry_override.as_ref()).await
    }

    /// `PUT /report/{year}/energy` with the entries converted to report records.
    ///
    /// # Errors
    ///
    /// As [`ReportBuilder::fetch`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, err, fields(year = self.year, entries = entries.len()))
    )]
    pub async fn update_energy(&self, entries: &[EnergyEntry]) -> Result<UpdateAck, VsmeError> {
        let body: Vec<EnergyConsumption> = entries.iter().map(|e| energy_record(e, self.year)).collect();
        api::put_section(&self.client, self.year, "energy", &body, self.retry_override.as_ref()).await
    }

    /// `PUT /report/{year}/emissions` with the entries converted to report records.
    ///
    /// # Errors
    ///
    /// As [`ReportBuilder::fetch`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, err, fields(year = self.year, entries = entries.len()))
    )]
    pub async fn update_emissions(&self, entries: &[EmissionEntry]) -> Result<UpdateAck, VsmeError> {
        let body: Vec<GhgEmissions> = entries.iter().map(|e| emission_record(e, self.year)).collect();
        api::put_section(&self.client, self.year, "emissions", &body, self.retry_override.as_ref()).await
    }

    /// `GET /export/{year}/xbrl`. The export document is passed through as-is.
    ///
    /// # Errors
    ///
    /// As [`ReportBuilder::fetch`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(year = self.year)))]
    pub async fn export_xbrl(&self) -> Result<serde_json::Value, VsmeError> {
        api::get_xbrl(&self.client, self.year, self.retry_override.as_ref()).await
    }
}
