//! Scope 1 and Scope 2 GHG emissions (VSME B2).

mod model;
mod summary;

pub use model::{EmissionEdit, EmissionEntry, EmissionScope, ScopeFilter};
pub use summary::{EmissionsSummary, filter, summarize};

use crate::core::store::EntryStore;

/// Entry store for the emissions domain.
pub type EmissionStore = EntryStore<EmissionEntry>;
