//! Merge logic for the Xbox 360 catalog.
//!
//! Takes the loaded catalog, translation table, and listing index as
//! values and returns the enriched sequence plus run statistics; no
//! state lives outside the call.

pub mod enrich;

pub use enrich::{EnrichStats, enrich_catalog};
