//! Catalog source abstraction.
//!
//! [`CatalogSource`] is the read-only query surface the worker answers from.
//! Each method maps to one request the plugin (or any other consumer of the
//! worker protocol) can make. Nothing is ever written back.

use crate::catalog::models::{JobDetail, JobPage, JobQuery};
use crate::domain::error::Result;
use crate::domain::{Catalog, JobId, LookupEntry};

/// Read-only access to a job catalog.
///
/// # Implementations
///
/// - [`JsonCatalog`](super::JsonCatalog): fixture file or embedded JSON
///
/// # Examples
///
/// ```
/// use jobboard::catalog::{CatalogSource, JobQuery, JsonCatalog};
///
/// let source = JsonCatalog::embedded()?;
/// let page = source.query_jobs(&JobQuery { page: Some(1), page_size: Some(6), ..JobQuery::default() })?;
/// assert!(page.data.len() <= 6);
/// # Ok::<(), jobboard::JobBoardError>(())
/// ```
pub trait CatalogSource: Send {
    /// Returns the whole catalog for the plugin's catalog store.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be produced.
    fn snapshot(&self) -> Result<Catalog>;

    /// Filters and optionally paginates the job list.
    ///
    /// `total` is the number of matches before pagination. Summaries omit
    /// photos and description.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn query_jobs(&self, query: &JobQuery) -> Result<JobPage>;

    /// Returns the detail view of one record, `Ok(None)` when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn job_detail(&self, id: JobId) -> Result<Option<JobDetail>>;

    /// Returns the full education-level label set.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn education_levels(&self) -> Result<Vec<LookupEntry>>;

    /// Returns the full salary-band label set.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read.
    fn salary_bands(&self) -> Result<Vec<LookupEntry>>;
}
