use crate::core::catalog::Catalog;
use crate::core::store::{Entry, EntryDefaults, EntryId};
use crate::core::units::WaterUnit;
use serde::{Deserialize, Serialize};

/// Where withdrawn water comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WaterSourceType {
    #[default]
    Municipal,
    Surface,
    Groundwater,
    Seawater,
    Rainwater,
    Recycled,
}

impl WaterSourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Municipal => "municipal",
            Self::Surface => "surface",
            Self::Groundwater => "groundwater",
            Self::Seawater => "seawater",
            Self::Rainwater => "rainwater",
            Self::Recycled => "recycled",
        }
    }
}

/// Water use at one site for one period (VSME B3).
///
/// `discharge` is not required to be at most `withdrawal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub id: EntryId,
    /// Free-text site or meter name.
    pub source: String,
    pub source_type: WaterSourceType,
    pub withdrawal: f64,
    pub discharge: f64,
    pub recycled: f64,
    pub unit: WaterUnit,
    pub location: String,
    pub period: String,
    pub water_stressed: bool,
    #[serde(default)]
    pub notes: String,
}

impl WaterEntry {
    #[must_use]
    pub fn withdrawal_m3(&self) -> f64 {
        self.unit.to_m3(self.withdrawal)
    }

    #[must_use]
    pub fn discharge_m3(&self) -> f64 {
        self.unit.to_m3(self.discharge)
    }

    #[must_use]
    pub fn recycled_m3(&self) -> f64 {
        self.unit.to_m3(self.recycled)
    }

    /// Withdrawal minus discharge, m³. May be negative.
    #[must_use]
    pub fn consumption_m3(&self) -> f64 {
        self.withdrawal_m3() - self.discharge_m3()
    }
}

/// Discrete edits of a [`WaterEntry`]. Plain field replacement.
#[derive(Debug, Clone, PartialEq)]
pub enum WaterEdit {
    Source(String),
    SourceType(WaterSourceType),
    Withdrawal(f64),
    Discharge(f64),
    Recycled(f64),
    Unit(WaterUnit),
    Location(String),
    Period(String),
    WaterStressed(bool),
    Notes(String),
}

impl Entry for WaterEntry {
    type Seed = ();
    type Edit = WaterEdit;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn create(id: EntryId, (): (), defaults: EntryDefaults<'_>) -> Self {
        Self {
            id,
            source: String::new(),
            source_type: WaterSourceType::Municipal,
            withdrawal: 0.0,
            discharge: 0.0,
            recycled: 0.0,
            unit: WaterUnit::M3,
            location: String::new(),
            period: defaults.period.to_string(),
            water_stressed: false,
            notes: String::new(),
        }
    }

    fn apply(&mut self, edit: WaterEdit, _catalog: &Catalog) {
        match edit {
            WaterEdit::Source(v) => self.source = v,
            WaterEdit::SourceType(v) => self.source_type = v,
            WaterEdit::Withdrawal(v) => self.withdrawal = v,
            WaterEdit::Discharge(v) => self.discharge = v,
            WaterEdit::Recycled(v) => self.recycled = v,
            WaterEdit::Unit(v) => self.unit = v,
            WaterEdit::Location(v) => self.location = v,
            WaterEdit::Period(v) => self.period = v,
            WaterEdit::WaterStressed(v) => self.water_stressed = v,
            WaterEdit::Notes(v) => self.notes = v,
        }
    }
}
