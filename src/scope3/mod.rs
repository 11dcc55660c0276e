//! Scope 3 value-chain emissions (VSME BP1).

mod model;
mod summary;

pub use model::{DEFAULT_CURRENCY, GENERIC_UNIT, SPEND_ACTIVITY, Scope3Edit, Scope3Entry, Scope3Method};
pub use summary::{CategoryEmissions, Scope3Summary, summarize};

use crate::core::store::EntryStore;

/// Entry store for the Scope 3 domain.
pub type Scope3Store = EntryStore<Scope3Entry>;
