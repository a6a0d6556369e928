//! University catalog: records, dataset and query engine.
//!
//! # Data Flow
//! ```text
//! embedded seed / JSON file
//!     → dataset.rs (parse, validate invariants)
//!     → Arc<Dataset> (immutable for the process lifetime)
//!     → query.rs (lookups, search, stats, faculties)
//!     → HTTP handlers
//! ```
//!
//! # Design Decisions
//! - No interior mutability: concurrent readers need no locks
//! - Lookups return `Option`; enum validation belongs to the transport layer
//! - Every query is a linear scan; the dataset is a few dozen records

pub mod dataset;
pub mod faculty;
pub mod model;
pub mod query;
pub mod search;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dataset::{Dataset, DatasetError};
pub use model::{Category, Faculty, FeeRange, Region, University};
pub use query::QueryEngine;
pub use search::{Page, PageRequest, SearchFilter, Selection, Sort, SortKey, SortOrder};
pub use stats::{RegionStats, Stats};
