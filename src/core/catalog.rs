//! Static lookup tables: energy sources, grid factors, emission and Scope 3 catalogs.
//!
//! The tables are configuration data. The built-in set is embedded as JSON,
//! parsed once on first use and shared behind an `Arc`; callers with their own
//! tables can parse them with [`Catalog::from_json`] and hand them to the entry
//! stores.

use crate::core::VsmeError;
use crate::emissions::EmissionScope;
use crate::energy::EnergyType;
use crate::scope3::Scope3Method;
use crate::water::WaterSourceType;
use serde::Deserialize;
use std::sync::{Arc, LazyLock};

const BUILTIN_JSON: &str = include_str!("catalog.json");

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(Catalog::from_json(BUILTIN_JSON).expect("embedded catalog.json is valid"))
});

/// Spend category used when a Scope 3 category has no explicit mapping.
pub const DEFAULT_SPEND_CATEGORY: &str = "purchased_goods";

/// An energy source and its fixed renewable classification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergySourceDef {
    pub value: String,
    pub label: String,
    #[serde(rename = "type")]
    pub energy_type: EnergyType,
}

/// A country and its grid electricity emission factor (kg CO₂e per kWh).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryFactor {
    pub code: String,
    pub name: String,
    pub factor: f64,
}

/// An activity with the unit its quantity is entered in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityDef {
    pub value: String,
    pub label: String,
    pub unit: String,
}

/// A Scope 1 or Scope 2 emission category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmissionCategoryDef {
    pub value: String,
    pub label: String,
    pub activities: Vec<ActivityDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EmissionCatalog {
    #[serde(default)]
    scope_1: Vec<EmissionCategoryDef>,
    #[serde(default)]
    scope_2: Vec<EmissionCategoryDef>,
}

/// An EEIO spend sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpendFactorDef {
    pub value: String,
    pub label: String,
}

/// A GHG Protocol Scope 3 category and the estimation methods it supports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scope3CategoryDef {
    pub number: u8,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub methods: Vec<Scope3Method>,
    /// Spend category the calculator expects for this category.
    #[serde(default)]
    pub spend_category: Option<String>,
    #[serde(default)]
    pub spend_factors: Vec<SpendFactorDef>,
    #[serde(default)]
    pub activity_types: Vec<ActivityDef>,
}

impl Scope3CategoryDef {
    #[must_use]
    pub fn supports(&self, method: Scope3Method) -> bool {
        self.methods.contains(&method)
    }

    #[must_use]
    pub fn first_spend_factor(&self) -> Option<&SpendFactorDef> {
        self.spend_factors.first()
    }

    #[must_use]
    pub fn first_activity(&self) -> Option<&ActivityDef> {
        self.activity_types.first()
    }

    #[must_use]
    pub fn activity(&self, value: &str) -> Option<&ActivityDef> {
        self.activity_types.iter().find(|a| a.value == value)
    }

    #[must_use]
    pub fn spend_category(&self) -> &str {
        self.spend_category.as_deref().unwrap_or(DEFAULT_SPEND_CATEGORY)
    }
}

/// A water source type with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WaterSourceDef {
    pub value: WaterSourceType,
    pub label: String,
}

/// Immutable set of lookup tables.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    default_grid_factor: f64,
    energy_sources: Vec<EnergySourceDef>,
    countries: Vec<CountryFactor>,
    #[serde(default)]
    emission_categories: EmissionCatalog,
    #[serde(default)]
    scope3_categories: Vec<Scope3CategoryDef>,
    #[serde(default)]
    water_sources: Vec<WaterSourceDef>,
}

impl Catalog {
    /// The built-in tables, parsed once per process.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`VsmeError::Data`] if the document does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, VsmeError> {
        serde_json::from_str(json).map_err(|e| VsmeError::Data(format!("catalog parse: {e}")))
    }

    /* ---------------- energy ---------------- */

    pub fn energy_sources(&self) -> &[EnergySourceDef] {
        &self.energy_sources
    }

    pub fn energy_source(&self, value: &str) -> Option<&EnergySourceDef> {
        self.energy_sources.iter().find(|s| s.value == value)
    }

    pub fn countries(&self) -> &[CountryFactor] {
        &self.countries
    }

    pub fn country(&self, code: &str) -> Option<&CountryFactor> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Grid factor for `code`, or the default factor for unknown countries.
    pub fn grid_factor(&self, code: &str) -> f64 {
        self.country(code)
            .map_or(self.default_grid_factor, |c| c.factor)
    }

    /* ---------------- emissions ---------------- */

    /// Categories offered for a scope; both Scope 2 methods share one list.
    pub fn emission_categories(&self, scope: EmissionScope) -> &[EmissionCategoryDef] {
        match scope {
            EmissionScope::Scope1 => &self.emission_categories.scope_1,
            EmissionScope::Scope2Location | EmissionScope::Scope2Market => {
                &self.emission_categories.scope_2
            }
        }
    }

    /// Unit of the first activity named `activity` across all categories of `scope`.
    pub fn emission_unit(&self, scope: EmissionScope, activity: &str) -> Option<&str> {
        self.emission_categories(scope)
            .iter()
            .find_map(|cat| cat.activities.iter().find(|a| a.value == activity))
            .map(|a| a.unit.as_str())
    }

    /* ---------------- scope 3 ---------------- */

    pub fn scope3_categories(&self) -> &[Scope3CategoryDef] {
        &self.scope3_categories
    }

    pub fn scope3_category(&self, number: u8) -> Option<&Scope3CategoryDef> {
        self.scope3_categories.iter().find(|c| c.number == number)
    }

    /* ---------------- water ---------------- */

    pub fn water_sources(&self) -> &[WaterSourceDef] {
        &self.water_sources
    }

    pub fn water_source_label(&self, source: WaterSourceType) -> Option<&str> {
        self.water_sources
            .iter()
            .find(|s| s.value == source)
            .map(|s| s.label.as_str())
    }
}
