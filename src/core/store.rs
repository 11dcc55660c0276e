//! Ordered, per-domain entry collections.
//!
//! Each reporting domain keeps its own [`EntryStore`]. Stores are never shared
//! across domains; a store only knows the catalog it reads defaults from and the
//! reporting year new entries are stamped with.

use crate::core::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Unique identifier of an entry within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// A fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// What a new entry is built from besides its seed: the catalog and the period label.
#[derive(Debug, Clone, Copy)]
pub struct EntryDefaults<'a> {
    pub catalog: &'a Catalog,
    pub period: &'a str,
}

/// A record that can live in an [`EntryStore`].
pub trait Entry: Clone {
    /// Caller-chosen parameters for a new entry (e.g. the scope of an emission row).
    type Seed;
    /// The discrete edits this record supports.
    type Edit;

    fn id(&self) -> &EntryId;

    /// Build a record with domain defaults.
    fn create(id: EntryId, seed: Self::Seed, defaults: EntryDefaults<'_>) -> Self;

    /// Apply one edit, including any field-coupling rules it triggers.
    fn apply(&mut self, edit: Self::Edit, catalog: &Catalog);
}

/// Ordered collection of one domain's entries.
#[derive(Debug, Clone)]
pub struct EntryStore<E: Entry> {
    entries: Vec<E>,
    catalog: Arc<Catalog>,
    reporting_year: i32,
}

impl<E: Entry> EntryStore<E> {
    /// An empty store using the built-in catalog.
    pub fn new(reporting_year: i32) -> Self {
        Self::with_catalog(Catalog::builtin(), reporting_year)
    }

    /// An empty store using caller-provided lookup tables.
    pub fn with_catalog(catalog: Arc<Catalog>, reporting_year: i32) -> Self {
        Self {
            entries: Vec::new(),
            catalog,
            reporting_year,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reporting_year(&self) -> i32 {
        self.reporting_year
    }

    /// Append a new entry built from domain defaults and return its id.
    pub fn add(&mut self, seed: E::Seed) -> EntryId {
        let id = self.fresh_id();
        let period = self.reporting_year.to_string();
        let entry = E::create(
            id.clone(),
            seed,
            EntryDefaults {
                catalog: &self.catalog,
                period: &period,
            },
        );
        self.entries.push(entry);
        id
    }

    /// Append an existing record. Returns `false` (and drops it) if its id is taken.
    pub fn insert(&mut self, entry: E) -> bool {
        if self.contains(entry.id()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Apply `edit` to the entry with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &EntryId, edit: E::Edit) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) {
            entry.apply(edit, &self.catalog);
        }
    }

    /// Remove the entry with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &EntryId) {
        self.entries.retain(|e| e.id() != id);
    }

    pub fn get(&self, id: &EntryId) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl<'a, E: Entry> IntoIterator for &'a EntryStore<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
