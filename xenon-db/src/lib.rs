//! SQLite persistence for the enriched catalog.
//!
//! One table, `ContentItems`, with an auto-incrementing row ID as its
//! only identity; the business Title ID is a plain text column.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{ImportReport, OperationError, RowFailure, import_catalog, insert_game};
pub use queries::{ContentStats, SampleRow, content_stats, sample_rows};
pub use schema::{SchemaError, create_schema, open_database, open_memory};
