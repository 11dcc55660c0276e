use serde::Serialize;

use super::model::{EsgReport, ReportScope};
use crate::core::conversions::percentage;
use crate::energy::EnergyType;

/// Emissions by scope, in tonnes CO₂e.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScopeSplit {
    pub scope1: f64,
    /// Location- and market-based combined.
    pub scope2: f64,
    /// Scope 3 category estimates plus any `scope_3` emission records.
    pub scope3: f64,
}

impl ScopeSplit {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.scope1 + self.scope2 + self.scope3
    }

    /// `(label, tonnes)` slices with a non-zero value.
    #[must_use]
    pub fn slices(&self) -> Vec<(&'static str, f64)> {
        [
            ("Scope 1", self.scope1),
            ("Scope 2", self.scope2),
            ("Scope 3", self.scope3),
        ]
        .into_iter()
        .filter(|(_, v)| *v != 0.0)
        .collect()
    }
}

/// Headline figures of a report.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DashboardSummary {
    pub reporting_year: i32,
    pub scopes: ScopeSplit,
    pub total_emissions_tonnes: f64,
    pub total_energy_kwh: f64,
    pub renewable_energy_kwh: f64,
    pub renewable_pct: f64,
    pub total_water_m3: f64,
    pub headcount: u64,
    pub female_pct: f64,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_report(report: &EsgReport) -> Self {
        let mut scopes = ScopeSplit {
            scope3: total(report.scope_3_data.iter().map(|c| c.estimated_co2e)),
            ..ScopeSplit::default()
        };
        for e in &report.emissions_data {
            match e.scope {
                ReportScope::Scope1 => scopes.scope1 += e.co2e_tonnes,
                ReportScope::Scope3 => scopes.scope3 += e.co2e_tonnes,
                ReportScope::Scope2Location | ReportScope::Scope2Market => {
                    scopes.scope2 += e.co2e_tonnes;
                }
            }
        }

        let total_energy_kwh = total(report.energy_data.iter().map(|e| e.consumption_kwh));
        let renewable_energy_kwh = total(
            report
                .energy_data
                .iter()
                .filter(|e| e.fuel_type == EnergyType::Renewable)
                .map(|e| e.consumption_kwh),
        );

        let (headcount, female) = report
            .employee_data
            .as_ref()
            .map_or((0, 0), |m| (m.total_headcount, m.female_count));
        #[allow(clippy::cast_precision_loss)]
        let female_pct = percentage(female as f64, headcount as f64);

        Self {
            reporting_year: report.reporting_year,
            total_emissions_tonnes: scopes.total(),
            scopes,
            total_energy_kwh,
            renewable_energy_kwh,
            renewable_pct: percentage(renewable_energy_kwh, total_energy_kwh),
            total_water_m3: total(report.water_data.iter().map(|w| w.volume_m3)),
            headcount,
            female_pct,
        }
    }
}

/// Sum starting from `+0.0`; an empty `f64` `sum()` is `-0.0`.
fn total(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |acc, v| acc + v)
}

impl From<&EsgReport> for DashboardSummary {
    fn from(report: &EsgReport) -> Self {
        Self::from_report(report)
    }
}
