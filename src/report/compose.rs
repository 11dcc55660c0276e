//! Entry → report record mapping.

use chrono::NaiveDate;

use super::model::{EmployeeMetrics, EnergyConsumption, EsgReport, GhgEmissions, Scope3Category, WaterUsage};
use crate::core::conversions::kg_to_tonnes;
use crate::emissions::EmissionEntry;
use crate::energy::EnergyEntry;
use crate::scope3::{Scope3Entry, Scope3Method};
use crate::water::WaterEntry;
use crate::workforce::{WorkforceEntry, summarize as summarize_workforce};

/// Methodology label of every composed Scope 1/2 record.
pub const ACTIVITY_METHODOLOGY: &str = "Activity-based";

/// Jan 1 and Dec 31 of `year`.
fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default(),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default(),
    )
}

/// Year an entry's free-form period label refers to (`"2024"`, `"2024-Q3"`, …).
fn period_year(period: &str, fallback: i32) -> i32 {
    period
        .trim()
        .get(..4)
        .and_then(|y| y.parse().ok())
        .unwrap_or(fallback)
}

#[must_use]
pub fn energy_record(e: &EnergyEntry, reporting_year: i32) -> EnergyConsumption {
    let (period_start, period_end) = year_bounds(period_year(&e.period, reporting_year));
    EnergyConsumption {
        id: Some(e.id.to_string()),
        period_start,
        period_end,
        fuel_type: e.energy_type,
        consumption_kwh: e.kwh(),
        source_document: None,
    }
}

/// Unset emissions are reported as 0 t.
#[must_use]
pub fn emission_record(e: &EmissionEntry, reporting_year: i32) -> GhgEmissions {
    let (period_start, period_end) = year_bounds(reporting_year);
    GhgEmissions {
        id: Some(e.id.to_string()),
        period_start,
        period_end,
        scope: e.scope.into(),
        co2e_tonnes: kg_to_tonnes(e.emissions_kg.unwrap_or(0.0)),
        methodology: ACTIVITY_METHODOLOGY.to_string(),
    }
}

#[must_use]
pub fn water_record(e: &WaterEntry, reporting_year: i32) -> WaterUsage {
    let (period_start, period_end) = year_bounds(period_year(&e.period, reporting_year));
    WaterUsage {
        id: Some(e.id.to_string()),
        period_start,
        period_end,
        volume_m3: e.withdrawal_m3(),
        source_document: None,
    }
}

/// Spend amount is only reported for spend-based rows.
#[must_use]
pub fn scope3_record(e: &Scope3Entry) -> Scope3Category {
    Scope3Category {
        category_name: e.category_name.clone(),
        spend_amount: if e.method == Scope3Method::Spend {
            e.quantity
        } else {
            0.0
        },
        estimated_co2e: kg_to_tonnes(e.emissions_kg.unwrap_or(0.0)),
    }
}

/// One record summing every workforce entry, or `None` without entries.
#[must_use]
pub fn employee_record(entries: &[WorkforceEntry], reporting_year: i32) -> Option<EmployeeMetrics> {
    if entries.is_empty() {
        return None;
    }
    let s = summarize_workforce(entries);
    Some(EmployeeMetrics {
        period_end: year_bounds(reporting_year).1,
        total_headcount: s.total_headcount,
        female_count: s.female,
        male_count: s.male,
        other_gender_count: s.other_gender,
    })
}

/// Assembles the five domains' entries into one [`EsgReport`].
///
/// ```
/// use vsme_rs::report::ReportComposer;
/// use vsme_rs::EnergyStore;
///
/// let mut energy = EnergyStore::new(2024);
/// energy.add(());
/// let report = ReportComposer::new(2024).energy(energy.entries()).compose();
/// assert_eq!(report.energy_data.len(), 1);
/// assert!(report.employee_data.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportComposer<'a> {
    year: i32,
    energy: &'a [EnergyEntry],
    emissions: &'a [EmissionEntry],
    water: &'a [WaterEntry],
    workforce: &'a [WorkforceEntry],
    scope3: &'a [Scope3Entry],
}

impl<'a> ReportComposer<'a> {
    #[must_use]
    pub fn new(reporting_year: i32) -> Self {
        Self {
            year: reporting_year,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn energy(mut self, entries: &'a [EnergyEntry]) -> Self {
        self.energy = entries;
        self
    }

    #[must_use]
    pub const fn emissions(mut self, entries: &'a [EmissionEntry]) -> Self {
        self.emissions = entries;
        self
    }

    #[must_use]
    pub const fn water(mut self, entries: &'a [WaterEntry]) -> Self {
        self.water = entries;
        self
    }

    #[must_use]
    pub const fn workforce(mut self, entries: &'a [WorkforceEntry]) -> Self {
        self.workforce = entries;
        self
    }

    #[must_use]
    pub const fn scope3(mut self, entries: &'a [Scope3Entry]) -> Self {
        self.scope3 = entries;
        self
    }

    #[must_use]
    pub fn compose(self) -> EsgReport {
        EsgReport {
            reporting_year: self.year,
            energy_data: self.energy.iter().map(|e| energy_record(e, self.year)).collect(),
            emissions_data: self
                .emissions
                .iter()
                .map(|e| emission_record(e, self.year))
                .collect(),
            water_data: self.water.iter().map(|e| water_record(e, self.year)).collect(),
            employee_data: employee_record(self.workforce, self.year),
            scope_3_data: self.scope3.iter().map(scope3_record).collect(),
        }
    }
}
