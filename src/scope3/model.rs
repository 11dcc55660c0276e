use crate::core::catalog::{Catalog, Scope3CategoryDef};
use crate::core::conversions::non_negative;
use crate::core::store::{Entry, EntryDefaults, EntryId};
use serde::{Deserialize, Serialize};

/// Activity type sent for every spend-based row.
pub const SPEND_ACTIVITY: &str = "spend_purchased_goods";
/// Currency (and unit) of a new spend-based row.
pub const DEFAULT_CURRENCY: &str = "EUR";
/// Unit used when a category offers no activity types.
pub const GENERIC_UNIT: &str = "unit";

/// How a Scope 3 figure is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope3Method {
    /// EEIO factor applied to money spent.
    Spend,
    /// Emission factor applied to a physical activity quantity.
    Activity,
}

/// One value-chain emission source (VSME BP1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope3Entry {
    pub id: EntryId,
    /// GHG Protocol category number (1–15; the catalog offers a subset).
    pub category: u8,
    pub category_name: String,
    pub method: Scope3Method,
    pub activity_type: String,
    /// Money spent (spend method) or activity amount.
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions_kg: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

impl Scope3Entry {
    /// Reset activity, unit, sub-category and currency to the first options `method` offers.
    fn reset_for_method(&mut self, method: Scope3Method, def: Option<&Scope3CategoryDef>) {
        match method {
            Scope3Method::Spend => {
                self.activity_type = SPEND_ACTIVITY.to_string();
                self.unit = DEFAULT_CURRENCY.to_string();
                self.sub_category = def
                    .and_then(Scope3CategoryDef::first_spend_factor)
                    .map(|f| f.value.clone());
                self.currency = Some(DEFAULT_CURRENCY.to_string());
            }
            Scope3Method::Activity => {
                let first = def.and_then(Scope3CategoryDef::first_activity);
                self.activity_type = first.map(|a| a.value.clone()).unwrap_or_default();
                self.unit = first.map_or_else(|| GENERIC_UNIT.to_string(), |a| a.unit.clone());
                self.sub_category = None;
                self.currency = None;
            }
        }
    }
}

/// Discrete edits of a [`Scope3Entry`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scope3Edit {
    /// Resets activity, unit, sub-category and currency; clears emissions.
    Method(Scope3Method),
    /// Re-derives the unit for activity-method rows; clears emissions.
    ActivityType(String),
    /// Clears emissions.
    Quantity(f64),
    Unit(String),
    /// Clears emissions.
    SubCategory(Option<String>),
    Currency(Option<String>),
    Notes(String),
    Emissions(Option<f64>),
}

impl Entry for Scope3Entry {
    /// Category number.
    type Seed = u8;
    type Edit = Scope3Edit;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn create(id: EntryId, category: u8, defaults: EntryDefaults<'_>) -> Self {
        let def = defaults.catalog.scope3_category(category);
        let method = if def.is_some_and(|d| d.supports(Scope3Method::Spend)) {
            Scope3Method::Spend
        } else {
            Scope3Method::Activity
        };

        let mut entry = Self {
            id,
            category,
            category_name: def.map(|d| d.name.clone()).unwrap_or_default(),
            method,
            activity_type: String::new(),
            quantity: 0.0,
            unit: String::new(),
            sub_category: None,
            currency: None,
            emissions_kg: None,
            notes: String::new(),
        };
        entry.reset_for_method(method, def);
        entry
    }

    fn apply(&mut self, edit: Scope3Edit, catalog: &Catalog) {
        match edit {
            Scope3Edit::Method(method) => {
                self.method = method;
                self.reset_for_method(method, catalog.scope3_category(self.category));
                self.emissions_kg = None;
            }
            Scope3Edit::ActivityType(activity) => {
                if self.method == Scope3Method::Activity
                    && let Some(a) = catalog
                        .scope3_category(self.category)
                        .and_then(|d| d.activity(&activity))
                {
                    self.unit = a.unit.clone();
                }
                self.activity_type = activity;
                self.emissions_kg = None;
            }
            Scope3Edit::Quantity(q) => {
                self.quantity = non_negative(q);
                self.emissions_kg = None;
            }
            Scope3Edit::Unit(unit) => self.unit = unit,
            Scope3Edit::SubCategory(sub) => {
                self.sub_category = sub;
                self.emissions_kg = None;
            }
            Scope3Edit::Currency(currency) => self.currency = currency,
            Scope3Edit::Notes(notes) => self.notes = notes,
            Scope3Edit::Emissions(kg) => self.emissions_kg = kg,
        }
    }
}
