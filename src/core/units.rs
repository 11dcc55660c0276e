//! Unit normalization.
//!
//! Quantities are stored in the unit the user entered and converted to one
//! canonical unit per domain only when they are aggregated: kWh for energy,
//! cubic metres for water. Emission and workforce figures are already
//! homogeneous and have no normalizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// kWh per MWh.
pub const KWH_PER_MWH: f64 = 1000.0;
/// kWh per GJ.
pub const KWH_PER_GJ: f64 = 277.78;
/// Litres per cubic metre.
pub const LITERS_PER_M3: f64 = 1000.0;
/// Cubic metres per US gallon.
pub const M3_PER_GALLON: f64 = 0.003_785_41;

/// Energy quantity unit.
///
/// Serialized as its label (`kWh`, `MWh`, `GJ`). Any other label is kept
/// verbatim in [`EnergyUnit::Unknown`] so it survives a save and read-back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum EnergyUnit {
    #[default]
    KWh,
    MWh,
    GJ,
    /// A label this crate does not know; quantities pass through unconverted.
    Unknown(String),
}

impl EnergyUnit {
    /// Convert `quantity` in this unit to kWh.
    #[must_use]
    pub fn to_kwh(&self, quantity: f64) -> f64 {
        match self {
            Self::KWh | Self::Unknown(_) => quantity,
            Self::MWh => quantity * KWH_PER_MWH,
            Self::GJ => quantity * KWH_PER_GJ,
        }
    }

    /// The wire label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::KWh => "kWh",
            Self::MWh => "MWh",
            Self::GJ => "GJ",
            Self::Unknown(label) => label,
        }
    }
}

impl From<String> for EnergyUnit {
    fn from(label: String) -> Self {
        match label.as_str() {
            "kWh" => Self::KWh,
            "MWh" => Self::MWh,
            "GJ" => Self::GJ,
            _ => Self::Unknown(label),
        }
    }
}

impl From<EnergyUnit> for String {
    fn from(unit: EnergyUnit) -> Self {
        match unit {
            EnergyUnit::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Water volume unit.
///
/// Serialized as `m3`, `liters` or `gallons`; other labels are kept in
/// [`WaterUnit::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum WaterUnit {
    #[default]
    M3,
    Liters,
    Gallons,
    /// A label this crate does not know; volumes pass through unconverted.
    Unknown(String),
}

impl WaterUnit {
    /// Convert `volume` in this unit to cubic metres.
    #[must_use]
    pub fn to_m3(&self, volume: f64) -> f64 {
        match self {
            Self::M3 | Self::Unknown(_) => volume,
            Self::Liters => volume / LITERS_PER_M3,
            Self::Gallons => volume * M3_PER_GALLON,
        }
    }

    /// The wire label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::M3 => "m3",
            Self::Liters => "liters",
            Self::Gallons => "gallons",
            Self::Unknown(label) => label,
        }
    }
}

impl From<String> for WaterUnit {
    fn from(label: String) -> Self {
        match label.as_str() {
            "m3" => Self::M3,
            "liters" => Self::Liters,
            "gallons" => Self::Gallons,
            _ => Self::Unknown(label),
        }
    }
}

impl From<WaterUnit> for String {
    fn from(unit: WaterUnit) -> Self {
        match unit {
            WaterUnit::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WaterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize an energy quantity to kWh.
#[must_use]
pub fn normalize_energy(quantity: f64, unit: EnergyUnit) -> f64 {
    unit.to_kwh(quantity)
}

/// Normalize a water volume to cubic metres.
#[must_use]
pub fn normalize_water(volume: f64, unit: WaterUnit) -> f64 {
    unit.to_m3(volume)
}
