//! Client for the external emission calculator.
//!
//! Single requests go through [`Calculator::activity`] and [`Calculator::spend`].
//! The batch operations ([`Calculator::energy`], [`Calculator::emissions`],
//! [`Calculator::scope3`]) fire one request per entry, run them concurrently and
//! write each result into the store as soon as it resolves. A failed request never
//! aborts the batch.

mod api;
mod model;
mod wire;

pub use model::{ActivityRequest, BatchReport, Calculation, SpendRequest};

use futures::FutureExt;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::core::catalog::DEFAULT_SPEND_CATEGORY;
use crate::core::{Entry, EntryId, EntryStore, RetryConfig, VsmeClient, VsmeError};
use crate::emissions::{EmissionEdit, EmissionStore};
use crate::energy::{EnergyEdit, EnergyStore};
use crate::scope3::{DEFAULT_CURRENCY, Scope3Edit, Scope3Method, Scope3Store};

/// Activity type sent for gas-fired energy rows.
const GAS_ACTIVITY: &str = "natural_gas";
/// Activity type sent for every other non-renewable energy row.
const ELECTRICITY_ACTIVITY: &str = "electricity";
/// Sub-category sent with spend requests when the entry has none.
const DEFAULT_SUB_CATEGORY: &str = "default";

/// One request of a batch, with the local estimate to use if it fails.
struct Job<'a> {
    id: EntryId,
    estimate: Option<f64>,
    request: BoxFuture<'a, Result<f64, VsmeError>>,
}

/// Calculates emissions through the API.
#[derive(Debug, Clone)]
pub struct Calculator {
    client: VsmeClient,
    country: Option<String>,
    retry_override: Option<RetryConfig>,
}

impl Calculator {
    pub fn new(client: &VsmeClient) -> Self {
        Self {
            client: client.clone(),
            country: None,
            retry_override: None,
        }
    }

    /// Country sent with Scope 1/2 and activity-based Scope 3 requests.
    ///
    /// Defaults to the client's country. Energy rows always send their own.
    #[must_use]
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    /// Overrides the default retry policy for requests made by this calculator.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    fn default_country(&self) -> &str {
        self.country.as_deref().unwrap_or_else(|| self.client.country())
    }

    /// Activity-based calculation.
    ///
    /// # Errors
    ///
    /// Returns `VsmeError` on transport failure, a non-2xx status, or a response
    /// without `emissions_kg_co2e`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(activity = %req.activity_type))
    )]
    pub async fn activity(&self, req: &ActivityRequest) -> Result<Calculation, VsmeError> {
        api::post_activity(&self.client, req, self.retry_override.as_ref()).await
    }

    /// Spend-based calculation.
    ///
    /// # Errors
    ///
    /// Same as [`Calculator::activity`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(category = %req.category))
    )]
    pub async fn spend(&self, req: &SpendRequest) -> Result<Calculation, VsmeError> {
        api::post_spend(&self.client, req, self.retry_override.as_ref()).await
    }

    fn activity_kg(&self, req: ActivityRequest) -> BoxFuture<'_, Result<f64, VsmeError>> {
        async move { self.activity(&req).await.map(|c| c.emissions_kg_co2e) }.boxed()
    }

    fn spend_kg(&self, req: SpendRequest) -> BoxFuture<'_, Result<f64, VsmeError>> {
        async move { self.spend(&req).await.map(|c| c.emissions_kg_co2e) }.boxed()
    }

    /// Calculate every energy row.
    ///
    /// Renewable rows get 0 without a request. Rows whose request cannot reach the
    /// calculator, or whose answer cannot be read, get a local estimate of
    /// `round(kWh × grid factor)` for their country. Rows answered with an error
    /// status are left untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(entries = store.len())))]
    pub async fn energy(&self, store: &mut EnergyStore) -> BatchReport {
        let mut report = BatchReport::default();
        let mut jobs = Vec::new();
        let catalog = store.catalog();

        for e in store.entries() {
            if e.is_renewable() {
                report.calculated.push(e.id.clone());
                continue;
            }
            let kwh = e.kwh();
            let activity = if e.source.contains("gas") {
                GAS_ACTIVITY
            } else {
                ELECTRICITY_ACTIVITY
            };
            jobs.push(Job {
                id: e.id.clone(),
                estimate: Some((kwh * catalog.grid_factor(&e.country)).round()),
                request: self.activity_kg(ActivityRequest {
                    activity_type: activity.to_string(),
                    quantity: kwh,
                    country: e.country.clone(),
                }),
            });
        }

        for id in &report.calculated {
            store.update(id, EnergyEdit::Emissions(Some(0.0)));
        }

        run_jobs(store, jobs, EnergyEdit::Emissions, &mut report).await;
        report
    }

    /// Calculate every Scope 1/2 row. Failed rows are left untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(entries = store.len())))]
    pub async fn emissions(&self, store: &mut EmissionStore) -> BatchReport {
        let country = self.default_country().to_string();
        let jobs: Vec<Job<'_>> = store
            .entries()
            .iter()
            .map(|e| Job {
                id: e.id.clone(),
                estimate: None,
                request: self.activity_kg(ActivityRequest {
                    activity_type: e.activity_type.clone(),
                    quantity: e.quantity,
                    country: country.clone(),
                }),
            })
            .collect();

        let mut report = BatchReport::default();
        run_jobs(store, jobs, EmissionEdit::Emissions, &mut report).await;
        report
    }

    /// Calculate every Scope 3 row, spend- or activity-based per its method.
    /// Failed rows are left untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(entries = store.len())))]
    pub async fn scope3(&self, store: &mut Scope3Store) -> BatchReport {
        let country = self.default_country().to_string();
        let catalog = store.catalog();

        let jobs: Vec<Job<'_>> = store
            .entries()
            .iter()
            .map(|e| {
                let request = match e.method {
                    Scope3Method::Spend => self.spend_kg(SpendRequest {
                        spend_amount: e.quantity,
                        category: catalog
                            .scope3_category(e.category)
                            .map_or(DEFAULT_SPEND_CATEGORY, |d| d.spend_category())
                            .to_string(),
                        sub_category: e
                            .sub_category
                            .clone()
                            .unwrap_or_else(|| DEFAULT_SUB_CATEGORY.to_string()),
                        currency: e
                            .currency
                            .clone()
                            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                    }),
                    Scope3Method::Activity => self.activity_kg(ActivityRequest {
                        activity_type: e.activity_type.clone(),
                        quantity: e.quantity,
                        country: country.clone(),
                    }),
                };
                Job {
                    id: e.id.clone(),
                    estimate: None,
                    request,
                }
            })
            .collect();

        let mut report = BatchReport::default();
        run_jobs(store, jobs, Scope3Edit::Emissions, &mut report).await;
        report
    }
}

/// Drive `jobs` concurrently, applying each outcome to `store` as it arrives.
async fn run_jobs<E: Entry>(
    store: &mut EntryStore<E>,
    jobs: Vec<Job<'_>>,
    emissions: fn(Option<f64>) -> E::Edit,
    report: &mut BatchReport,
) {
    let mut pending: FuturesUnordered<_> = jobs
        .into_iter()
        .map(|job| async move { (job.id, job.estimate, job.request.await) })
        .collect();

    while let Some((id, estimate, outcome)) = pending.next().await {
        match (outcome, estimate) {
            (Ok(kg), _) => {
                store.update(&id, emissions(Some(kg)));
                report.calculated.push(id);
            }
            // Error statuses leave the entry untouched; transport and body failures fall back.
            (Err(e), Some(kg)) if !matches!(e, VsmeError::Status { .. }) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(entry = %id, error = %e, estimate_kg = kg, "calculation failed; using grid-factor estimate");
                #[cfg(not(feature = "tracing"))]
                let _ = e;
                store.update(&id, emissions(Some(kg)));
                report.estimated.push(id);
            }
            (Err(e), _) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(entry = %id, error = %e, "calculation failed");
                report.failed.push((id, e));
            }
        }
    }
}
