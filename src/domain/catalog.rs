//! The read-only catalog store.
//!
//! A [`Catalog`] holds every job record together with the education and
//! salary lookup tables. It is built once from the fixture (by the worker) and
//! never mutated afterwards; the plugin only reads from it.

use super::job::{JobId, JobRecord, LookupTable};
use serde::{Deserialize, Serialize};

/// Full, static collection of job records plus the two lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    jobs: Vec<JobRecord>,
    education_levels: LookupTable,
    salary_bands: LookupTable,
}

impl Catalog {
    /// Creates a catalog from already-identified records.
    #[must_use]
    pub const fn new(jobs: Vec<JobRecord>, education_levels: LookupTable, salary_bands: LookupTable) -> Self {
        Self {
            jobs,
            education_levels,
            salary_bands,
        }
    }

    /// Records in catalog order.
    #[must_use]
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    #[must_use]
    pub const fn education_levels(&self) -> &LookupTable {
        &self.education_levels
    }

    #[must_use]
    pub const fn salary_bands(&self) -> &LookupTable {
        &self.salary_bands
    }

    /// Looks a record up by its positional id.
    #[must_use]
    pub fn get(&self, id: JobId) -> Option<&JobRecord> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.jobs.get(index).filter(|job| job.id == id)
    }

    /// Education label for a record, `Unspecified` when the id is unknown.
    #[must_use]
    pub fn education_label(&self, job: &JobRecord) -> &str {
        self.education_levels.resolve(job.education_id)
    }

    /// Salary label for a record, `Unspecified` when the id is unknown.
    #[must_use]
    pub fn salary_label(&self, job: &JobRecord) -> &str {
        self.salary_bands.resolve(job.salary_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
