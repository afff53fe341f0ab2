//! Catalog source answered by the background worker.
//!
//! # Modules
//!
//! - `source`: The read-only [`CatalogSource`] trait
//! - `json`: Fixture-backed implementation
//! - `models`: Fixture and query wire types, separate from domain records

pub mod json;
pub mod models;
pub mod source;

pub use json::JsonCatalog;
pub use models::{CatalogFixture, FixtureJob, JobDetail, JobPage, JobQuery, JobSummary};
pub use source::CatalogSource;
