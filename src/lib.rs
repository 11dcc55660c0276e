//! vsme-rs: ESG metrics engine and API client for VSME sustainability reporting.
//!
//! The crate has two halves:
//! - A synchronous derivation engine. Each domain (energy, emissions, water,
//!   workforce, Scope 3) keeps its rows in an [`EntryStore`], applies discrete edits
//!   with their field-coupling rules, and reduces the rows to zero-safe summaries.
//! - An async client for the reporting API: emission calculation
//!   ([`Calculator`]), report persistence ([`ReportBuilder`]) and invoice upload
//!   ([`UploadBatch`]).
//!
//! ```
//! use vsme_rs::{EnergyEdit, EnergyStore, EnergyUnit};
//!
//! let mut energy = EnergyStore::new(2024);
//! let id = energy.add(());
//! energy.update(&id, EnergyEdit::Quantity(2.5));
//! energy.update(&id, EnergyEdit::Unit(EnergyUnit::MWh));
//! assert_eq!(energy.summary().total_kwh, 2500.0);
//! ```

/// Client, errors, units, catalog and the generic entry store.
pub mod core;

pub mod emissions;
pub mod energy;
pub mod scope3;
pub mod water;
pub mod workforce;

/// External emission calculator.
pub mod calculate;
/// Report composition, dashboard figures and persistence.
pub mod report;
/// Invoice upload pipeline.
pub mod upload;

pub use crate::core::{
    Backoff, Catalog, Entry, EntryId, EntryStore, EnergyUnit, RetryConfig, VsmeClient,
    VsmeClientBuilder, VsmeError, WaterUnit,
};

pub use calculate::{ActivityRequest, BatchReport, Calculation, Calculator, SpendRequest};
pub use emissions::{EmissionEdit, EmissionEntry, EmissionScope, EmissionStore, EmissionsSummary, ScopeFilter};
pub use energy::{EnergyEdit, EnergyEntry, EnergyStore, EnergySummary, EnergyType};
pub use report::{DashboardSummary, EsgReport, ReportBuilder, ReportComposer};
pub use scope3::{Scope3Edit, Scope3Entry, Scope3Method, Scope3Store, Scope3Summary};
pub use upload::{UploadBatch, UploadEvent, UploadJob, UploadReceipt, UploadState};
pub use water::{WaterEdit, WaterEntry, WaterSourceType, WaterStore, WaterSummary};
pub use workforce::{WorkforceCount, WorkforceEdit, WorkforceEntry, WorkforceStore, WorkforceSummary};

/// Install a `tracing` subscriber reading `RUST_LOG`, for demos and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
