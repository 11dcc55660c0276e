//! Workforce metrics (VSME B6): demographics, turnover, training, pay and safety.

mod model;
mod summary;

pub use model::{WorkforceCount, WorkforceEdit, WorkforceEntry};
pub use summary::{LocationHeadcount, WorkforceSummary, location_breakdown, summarize};

use crate::core::store::EntryStore;

/// Entry store for the workforce domain.
pub type WorkforceStore = EntryStore<WorkforceEntry>;
