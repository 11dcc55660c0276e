//! Energy consumption (VSME B1): entries, edits and summary.

mod model;
mod summary;

pub use model::{EnergyEdit, EnergyEntry, EnergyType};
pub use summary::{EnergySummary, summarize};

use crate::core::store::EntryStore;

/// Entry store for the energy domain.
pub type EnergyStore = EntryStore<EnergyEntry>;
