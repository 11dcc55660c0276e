use super::model::Scope3Entry;
use crate::core::conversions::kg_to_tonnes;
use crate::core::store::EntryStore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Emissions attributed to one Scope 3 category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEmissions {
    pub number: u8,
    pub name: String,
    pub emissions_kg: f64,
}

impl CategoryEmissions {
    #[must_use]
    pub fn emissions_tonnes(&self) -> f64 {
        kg_to_tonnes(self.emissions_kg)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Scope3Summary {
    /// Sum of calculated emissions; uncalculated entries count as 0.
    pub total_kg: f64,
    /// Categories with a non-zero subtotal, ascending by number.
    pub by_category: Vec<CategoryEmissions>,
}

impl Scope3Summary {
    #[must_use]
    pub fn total_tonnes(&self) -> f64 {
        kg_to_tonnes(self.total_kg)
    }
}

#[must_use]
pub fn summarize(entries: &[Scope3Entry]) -> Scope3Summary {
    let mut groups: BTreeMap<u8, CategoryEmissions> = BTreeMap::new();
    let mut total_kg = 0.0;

    for e in entries {
        let kg = e.emissions_kg.unwrap_or(0.0);
        total_kg += kg;
        groups
            .entry(e.category)
            .or_insert_with(|| CategoryEmissions {
                number: e.category,
                name: e.category_name.clone(),
                emissions_kg: 0.0,
            })
            .emissions_kg += kg;
    }

    Scope3Summary {
        total_kg,
        by_category: groups
            .into_values()
            .filter(|c| c.emissions_kg != 0.0)
            .collect(),
    }
}

impl EntryStore<Scope3Entry> {
    #[must_use]
    pub fn summary(&self) -> Scope3Summary {
        summarize(self.entries())
    }
}
