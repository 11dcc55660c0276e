use crate::core::{EntryId, VsmeError};
use serde::Serialize;

/// Activity-based calculation request (`POST /calculate/emissions`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRequest {
    pub activity_type: String,
    pub quantity: f64,
    pub country: String,
}

/// Spend-based (EEIO) calculation request (`POST /calculate/spend`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendRequest {
    pub spend_amount: f64,
    pub category: String,
    pub sub_category: String,
    pub currency: String,
}

/// The calculator's answer. Only `emissions_kg_co2e` is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub emissions_kg_co2e: f64,
    pub emissions_tonnes_co2e: Option<f64>,
    /// kg CO₂e per `unit`.
    pub emission_factor: Option<f64>,
    pub unit: Option<String>,
    pub scope: Option<String>,
}

/// Outcome of a batch "calculate all" run.
///
/// Individual failures never abort the batch; they are collected here.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Entries that received a calculated (or known-zero) figure.
    pub calculated: Vec<EntryId>,
    /// Entries whose request failed and that received a local estimate instead.
    pub estimated: Vec<EntryId>,
    /// Entries whose request failed and were left untouched.
    pub failed: Vec<(EntryId, VsmeError)>,
}

impl BatchReport {
    /// `true` when no entry was left without a figure.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of entries the batch looked at.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calculated.len() + self.estimated.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
