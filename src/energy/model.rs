use crate::core::catalog::Catalog;
use crate::core::conversions::non_negative;
use crate::core::store::{Entry, EntryDefaults, EntryId};
use crate::core::units::EnergyUnit;
use serde::{Deserialize, Serialize};

pub(crate) const FALLBACK_SOURCE: &str = "electricity_grid";
pub(crate) const FALLBACK_COUNTRY: &str = "UK";

/// Renewable classification of an energy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnergyType {
    Renewable,
    #[default]
    NonRenewable,
}

/// One row of energy consumption (VSME B1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEntry {
    pub id: EntryId,
    /// Catalog key of the energy source (e.g. `natural_gas`).
    pub source: String,
    /// Derived from `source`; kept in sync by [`EnergyEdit::Source`].
    #[serde(rename = "type")]
    pub energy_type: EnergyType,
    pub quantity: f64,
    pub unit: EnergyUnit,
    pub country: String,
    pub period: String,
    /// Unset until calculated; cleared by any edit that changes the inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions_kg: Option<f64>,
}

impl EnergyEntry {
    /// Quantity in kWh.
    #[must_use]
    pub fn kwh(&self) -> f64 {
        self.unit.to_kwh(self.quantity)
    }

    #[must_use]
    pub fn is_renewable(&self) -> bool {
        self.energy_type == EnergyType::Renewable
    }
}

/// Discrete edits of an [`EnergyEntry`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnergyEdit {
    /// Also re-derives the renewable type and clears emissions.
    Source(String),
    /// Clears emissions. Negative or non-finite values are stored as 0.
    Quantity(f64),
    /// Clears emissions.
    Unit(EnergyUnit),
    /// Clears emissions.
    Country(String),
    Period(String),
    /// Result of a calculation.
    Emissions(Option<f64>),
}

impl Entry for EnergyEntry {
    type Seed = ();
    type Edit = EnergyEdit;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn create(id: EntryId, (): (), defaults: EntryDefaults<'_>) -> Self {
        let (source, energy_type) = defaults
            .catalog
            .energy_sources()
            .first()
            .map_or((FALLBACK_SOURCE.to_string(), EnergyType::NonRenewable), |s| {
                (s.value.clone(), s.energy_type)
            });
        let country = defaults
            .catalog
            .countries()
            .first()
            .map_or_else(|| FALLBACK_COUNTRY.to_string(), |c| c.code.clone());

        Self {
            id,
            source,
            energy_type,
            quantity: 0.0,
            unit: EnergyUnit::KWh,
            country,
            period: defaults.period.to_string(),
            emissions_kg: None,
        }
    }

    fn apply(&mut self, edit: EnergyEdit, catalog: &Catalog) {
        match edit {
            EnergyEdit::Source(source) => {
                if let Some(def) = catalog.energy_source(&source) {
                    self.energy_type = def.energy_type;
                }
                self.source = source;
                self.emissions_kg = None;
            }
            EnergyEdit::Quantity(q) => {
                self.quantity = non_negative(q);
                self.emissions_kg = None;
            }
            EnergyEdit::Unit(unit) => {
                self.unit = unit;
                self.emissions_kg = None;
            }
            EnergyEdit::Country(country) => {
                self.country = country;
                self.emissions_kg = None;
            }
            EnergyEdit::Period(period) => self.period = period,
            EnergyEdit::Emissions(kg) => self.emissions_kg = kg,
        }
    }
}
