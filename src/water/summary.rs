use super::model::{WaterEntry, WaterSourceType};
use crate::core::conversions::{percentage, safe_ratio};
use crate::core::store::EntryStore;
use serde::Serialize;

/// Water totals in m³.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WaterSummary {
    pub withdrawal_m3: f64,
    pub discharge_m3: f64,
    pub recycled_m3: f64,
    /// `withdrawal_m3 - discharge_m3`, not clamped.
    pub consumption_m3: f64,
    /// `recycled_m3 / withdrawal_m3 * 100`; 0 without withdrawal.
    pub recycling_rate_pct: f64,
    /// Consumption at sites flagged as water-stressed.
    pub water_stressed_consumption_m3: f64,
}

/// Consumption intensity ratios. A ratio is `None` unless its denominator was given and is positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WaterIntensity {
    /// m³ per unit of production output.
    pub per_production_unit: Option<f64>,
    /// m³ per unit of revenue.
    pub per_revenue: Option<f64>,
}

/// Withdrawal attributed to one source type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceVolume {
    pub source_type: WaterSourceType,
    pub withdrawal_m3: f64,
}

impl WaterSummary {
    #[must_use]
    pub fn intensity(&self, production_output: Option<f64>, revenue: Option<f64>) -> WaterIntensity {
        let ratio = |d: Option<f64>| {
            d.filter(|d| *d > 0.0)
                .map(|d| safe_ratio(self.consumption_m3, d))
        };
        WaterIntensity {
            per_production_unit: ratio(production_output),
            per_revenue: ratio(revenue),
        }
    }
}

#[must_use]
pub fn summarize(entries: &[WaterEntry]) -> WaterSummary {
    let mut s = WaterSummary::default();
    for e in entries {
        s.withdrawal_m3 += e.withdrawal_m3();
        s.discharge_m3 += e.discharge_m3();
        s.recycled_m3 += e.recycled_m3();
        if e.water_stressed {
            s.water_stressed_consumption_m3 += e.consumption_m3();
        }
    }
    s.consumption_m3 = s.withdrawal_m3 - s.discharge_m3;
    s.recycling_rate_pct = percentage(s.recycled_m3, s.withdrawal_m3);
    s
}

/// Withdrawal per source type in first-seen order; source types with no withdrawal are left out.
#[must_use]
pub fn source_breakdown(entries: &[WaterEntry]) -> Vec<SourceVolume> {
    let mut out: Vec<SourceVolume> = Vec::new();
    for e in entries {
        let m3 = e.withdrawal_m3();
        match out.iter_mut().find(|v| v.source_type == e.source_type) {
            Some(v) => v.withdrawal_m3 += m3,
            None => out.push(SourceVolume {
                source_type: e.source_type,
                withdrawal_m3: m3,
            }),
        }
    }
    out.retain(|v| v.withdrawal_m3 != 0.0);
    out
}

impl EntryStore<WaterEntry> {
    #[must_use]
    pub fn summary(&self) -> WaterSummary {
        summarize(self.entries())
    }
}
