//! Core components of the `vsme-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`VsmeClient`] and its builder.
//! - The primary [`VsmeError`] type.
//! - Unit normalization and zero-safe ratio helpers.
//! - The static lookup [`Catalog`] and the generic [`EntryStore`].

/// Static lookup tables (energy sources, grid factors, category catalogs).
pub mod catalog;
/// The main client (`VsmeClient`), builder, and configuration.
pub mod client;
/// Zero-safe ratio, percentage and weighted-mean helpers.
pub mod conversions;
/// The primary error type (`VsmeError`) for the crate.
pub mod error;
/// Ordered per-domain entry collections.
pub mod store;
/// Canonical-unit conversion for energy and water quantities.
pub mod units;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::VsmeClient`
pub use catalog::Catalog;
pub use client::{Backoff, RetryConfig, VsmeClient, VsmeClientBuilder};
pub use error::VsmeError;
pub use store::{Entry, EntryDefaults, EntryId, EntryStore};
pub use units::{EnergyUnit, WaterUnit};
