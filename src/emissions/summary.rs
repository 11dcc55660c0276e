use super::model::{EmissionEntry, EmissionScope, ScopeFilter};
use crate::core::conversions::kg_to_tonnes;
use crate::core::store::EntryStore;
use serde::Serialize;

/// Scope 1/2 totals in kg CO₂e. Uncalculated entries count as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EmissionsSummary {
    pub scope1_kg: f64,
    pub scope2_location_kg: f64,
    pub scope2_market_kg: f64,
}

impl EmissionsSummary {
    /// Location- plus market-based Scope 2.
    #[must_use]
    pub fn scope2_kg(&self) -> f64 {
        self.scope2_location_kg + self.scope2_market_kg
    }

    /// Scope 1 + Scope 2. Scope 3 is added when composing the dashboard.
    #[must_use]
    pub fn total_kg(&self) -> f64 {
        self.scope1_kg + self.scope2_kg()
    }

    #[must_use]
    pub fn total_tonnes(&self) -> f64 {
        kg_to_tonnes(self.total_kg())
    }
}

#[must_use]
pub fn summarize(entries: &[EmissionEntry]) -> EmissionsSummary {
    let mut s = EmissionsSummary::default();
    for e in entries {
        let kg = e.emissions_kg.unwrap_or(0.0);
        match e.scope {
            EmissionScope::Scope1 => s.scope1_kg += kg,
            EmissionScope::Scope2Location => s.scope2_location_kg += kg,
            EmissionScope::Scope2Market => s.scope2_market_kg += kg,
        }
    }
    s
}

/// Entries visible under `filter`, in store order.
pub fn filter(entries: &[EmissionEntry], filter: ScopeFilter) -> impl Iterator<Item = &EmissionEntry> {
    entries.iter().filter(move |e| filter.matches(e.scope))
}

impl EntryStore<EmissionEntry> {
    #[must_use]
    pub fn summary(&self) -> EmissionsSummary {
        summarize(self.entries())
    }
}
