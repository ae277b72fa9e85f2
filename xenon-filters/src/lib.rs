//! Aurora category filter generation.
//!
//! Turns parsed game listings into per-category Lua filter files for
//! the Aurora dashboard, plus a genre summary and a statistics file.

pub mod error;
pub mod lua;
pub mod report;
pub mod title_id;

pub use error::FilterError;
pub use lua::{CategoryGroups, FilterStats, generate_filters, group_by_category, render_filter};
pub use report::{UNTRANSLATED, write_genre_summary};
pub use title_id::title_id_hex;
