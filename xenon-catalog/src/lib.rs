//! Data model and loaders for the Xbox 360 game catalog.
//!
//! The catalog is a JSON array of game records; a translation table
//! (flat JSON object) maps English titles to Chinese ones; tab-delimited
//! listing files supply developer/category/year data for backfilling.

pub mod json;
pub mod listing;
pub mod types;

pub use json::{CatalogError, load_catalog, load_translations, write_catalog};
pub use listing::{load_listings, parse_listing, parse_listing_file};
pub use types::{
    DEFAULT_PLATFORM, GameEntry, ListingEntry, ListingIndex, TranslationTable, UNKNOWN_DEVELOPER,
};
