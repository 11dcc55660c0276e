use super::model::EnergyEntry;
use crate::core::conversions::{kg_to_tonnes, percentage};
use crate::core::store::EntryStore;
use serde::Serialize;

/// Totals shown on the energy page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnergySummary {
    /// All consumption, kWh.
    pub total_kwh: f64,
    /// Consumption from renewable sources, kWh.
    pub renewable_kwh: f64,
    /// `renewable_kwh / total_kwh * 100`; 0 when nothing was consumed.
    pub renewable_pct: f64,
    /// Sum of calculated emissions; uncalculated entries count as 0.
    pub total_emissions_kg: f64,
}

impl EnergySummary {
    #[must_use]
    pub fn non_renewable_kwh(&self) -> f64 {
        self.total_kwh - self.renewable_kwh
    }

    #[must_use]
    pub fn total_emissions_tonnes(&self) -> f64 {
        kg_to_tonnes(self.total_emissions_kg)
    }
}

/// Reduce energy entries to their summary figures.
#[must_use]
pub fn summarize(entries: &[EnergyEntry]) -> EnergySummary {
    let mut s = EnergySummary::default();
    for e in entries {
        let kwh = e.kwh();
        s.total_kwh += kwh;
        if e.is_renewable() {
            s.renewable_kwh += kwh;
        }
        s.total_emissions_kg += e.emissions_kg.unwrap_or(0.0);
    }
    s.renewable_pct = percentage(s.renewable_kwh, s.total_kwh);
    s
}

impl EntryStore<EnergyEntry> {
    /// Summary over the current entries.
    #[must_use]
    pub fn summary(&self) -> EnergySummary {
        summarize(self.entries())
    }
}
