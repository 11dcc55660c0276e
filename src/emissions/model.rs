use crate::core::catalog::Catalog;
use crate::core::conversions::non_negative;
use crate::core::store::{Entry, EntryDefaults, EntryId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// GHG Protocol scope of a Scope 1/2 emission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionScope {
    #[serde(rename = "scope_1")]
    Scope1,
    #[serde(rename = "scope_2_location")]
    Scope2Location,
    #[serde(rename = "scope_2_market")]
    Scope2Market,
}

impl EmissionScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scope1 => "scope_1",
            Self::Scope2Location => "scope_2_location",
            Self::Scope2Market => "scope_2_market",
        }
    }

    /// Location- and market-based Scope 2 both count as Scope 2.
    #[must_use]
    pub const fn is_scope2(self) -> bool {
        matches!(self, Self::Scope2Location | Self::Scope2Market)
    }
}

impl fmt::Display for EmissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View filter used by the emissions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeFilter {
    #[default]
    All,
    Scope1,
    /// Both Scope 2 methods.
    Scope2,
    /// Exactly one scope.
    Only(EmissionScope),
}

impl ScopeFilter {
    #[must_use]
    pub fn matches(self, scope: EmissionScope) -> bool {
        match self {
            Self::All => true,
            Self::Scope1 => scope == EmissionScope::Scope1,
            Self::Scope2 => scope.is_scope2(),
            Self::Only(s) => s == scope,
        }
    }
}

/// One Scope 1 or Scope 2 emission source (VSME B2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionEntry {
    pub id: EntryId,
    pub scope: EmissionScope,
    pub category: String,
    pub activity_type: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions_kg: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

/// Discrete edits of an [`EmissionEntry`].
#[derive(Debug, Clone, PartialEq)]
pub enum EmissionEdit {
    Scope(EmissionScope),
    /// Does not reset the activity.
    Category(String),
    /// Re-derives the unit from the catalog and clears emissions.
    ActivityType(String),
    /// Clears emissions.
    Quantity(f64),
    Unit(String),
    Notes(String),
    Emissions(Option<f64>),
}

impl Entry for EmissionEntry {
    type Seed = EmissionScope;
    type Edit = EmissionEdit;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn create(id: EntryId, scope: EmissionScope, defaults: EntryDefaults<'_>) -> Self {
        let first_cat = defaults.catalog.emission_categories(scope).first();
        let first_activity = first_cat.and_then(|c| c.activities.first());

        Self {
            id,
            scope,
            category: first_cat.map(|c| c.value.clone()).unwrap_or_default(),
            activity_type: first_activity.map(|a| a.value.clone()).unwrap_or_default(),
            quantity: 0.0,
            unit: first_activity.map(|a| a.unit.clone()).unwrap_or_default(),
            emissions_kg: None,
            notes: String::new(),
        }
    }

    fn apply(&mut self, edit: EmissionEdit, catalog: &Catalog) {
        match edit {
            EmissionEdit::Scope(scope) => self.scope = scope,
            EmissionEdit::Category(category) => self.category = category,
            EmissionEdit::ActivityType(activity) => {
                if let Some(unit) = catalog.emission_unit(self.scope, &activity) {
                    self.unit = unit.to_string();
                }
                self.activity_type = activity;
                self.emissions_kg = None;
            }
            EmissionEdit::Quantity(q) => {
                self.quantity = non_negative(q);
                self.emissions_kg = None;
            }
            EmissionEdit::Unit(unit) => self.unit = unit,
            EmissionEdit::Notes(notes) => self.notes = notes,
            EmissionEdit::Emissions(kg) => self.emissions_kg = kg,
        }
    }
}
