//! Water withdrawal, discharge and recycling (VSME B3).

mod model;
mod summary;

pub use model::{WaterEdit, WaterEntry, WaterSourceType};
pub use summary::{SourceVolume, WaterIntensity, WaterSummary, source_breakdown, summarize};

use crate::core::store::EntryStore;

/// Entry store for the water domain.
pub type WaterStore = EntryStore<WaterEntry>;
