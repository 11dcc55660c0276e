use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::emissions::EmissionScope;
use crate::energy::EnergyType;

/// Scope tag of a reported emission record. Unlike [`EmissionScope`] it admits Scope 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportScope {
    #[serde(rename = "scope_1")]
    Scope1,
    #[serde(rename = "scope_2_location")]
    Scope2Location,
    #[serde(rename = "scope_2_market")]
    Scope2Market,
    #[serde(rename = "scope_3")]
    Scope3,
}

impl From<EmissionScope> for ReportScope {
    fn from(scope: EmissionScope) -> Self {
        match scope {
            EmissionScope::Scope1 => Self::Scope1,
            EmissionScope::Scope2Location => Self::Scope2Location,
            EmissionScope::Scope2Market => Self::Scope2Market,
        }
    }
}

/// VSME B1 energy record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyConsumption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub fuel_type: EnergyType,
    pub consumption_kwh: f64,
    /// Link to the invoice the figure came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
}

/// VSME B2 emission record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhgEmissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub scope: ReportScope,
    pub co2e_tonnes: f64,
    /// e.g. "Spend-based", "Activity-based".
    pub methodology: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub volume_m3: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMetrics {
    pub period_end: NaiveDate,
    pub total_headcount: u64,
    pub female_count: u64,
    pub male_count: u64,
    #[serde(default)]
    pub other_gender_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope3Category {
    pub category_name: String,
    pub spend_amount: f64,
    /// Tonnes CO₂e.
    pub estimated_co2e: f64,
}

/// One reporting year's data, as persisted by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgReport {
    pub reporting_year: i32,
    #[serde(default)]
    pub energy_data: Vec<EnergyConsumption>,
    #[serde(default)]
    pub emissions_data: Vec<GhgEmissions>,
    #[serde(default)]
    pub water_data: Vec<WaterUsage>,
    #[serde(default)]
    pub employee_data: Option<EmployeeMetrics>,
    #[serde(default)]
    pub scope_3_data: Vec<Scope3Category>,
}

impl EsgReport {
    /// A report with no data for `year`.
    #[must_use]
    pub fn empty(year: i32) -> Self {
        Self {
            reporting_year: year,
            energy_data: Vec::new(),
            emissions_data: Vec::new(),
            water_data: Vec::new(),
            employee_data: None,
            scope_3_data: Vec::new(),
        }
    }
}

/// Acknowledgement of a partial (`PUT`) update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAck {
    pub status: String,
    pub count: usize,
}
