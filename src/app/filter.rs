//! Draft and committed filter state.
//!
//! Editing the filter bar only touches the draft. The list is driven by the
//! committed criteria, which change only through an explicit commit (the
//! "Search" button or `Enter` in the company input). The committed value is
//! always a separate clone of the draft taken at confirmation time.

use crate::domain::{Catalog, JobRecord, LookupTable};

/// The three filter predicates. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub company_name: String,
    /// Education label, compared literally against the resolved record label.
    pub education: String,
    /// Salary label, compared literally against the resolved record label.
    pub salary: String,
}

impl FilterCriteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company_name.is_empty() && self.education.is_empty() && self.salary.is_empty()
    }

    /// Whether a record satisfies all three predicates.
    ///
    /// Company names match by case-insensitive substring; education and salary
    /// match by label equality after resolving the record's ids, so a record
    /// with an unknown id only matches the `Unspecified` label.
    #[must_use]
    pub fn matches(&self, catalog: &Catalog, job: &JobRecord) -> bool {
        let company = self.company_name.is_empty()
            || job
                .company_name
                .to_lowercase()
                .contains(&self.company_name.to_lowercase());
        let education = self.education.is_empty() || catalog.education_label(job) == self.education;
        let salary = self.salary.is_empty() || catalog.salary_label(job) == self.salary;

        company && education && salary
    }
}

/// A single draft edit, one variant per editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    CompanyName(String),
    Education(String),
    Salary(String),
}

/// How a commit was triggered. Both paths commit identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    Button,
    EnterKey,
}

/// Owner of the draft and committed criteria.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    draft: FilterCriteria,
    committed: FilterCriteria,
}

impl FilterController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one field of the draft. Never filters anything.
    pub fn update_draft(&mut self, update: FilterUpdate) {
        tracing::trace!(update = ?update, "draft updated");
        match update {
            FilterUpdate::CompanyName(value) => self.draft.company_name = value,
            FilterUpdate::Education(value) => self.draft.education = value,
            FilterUpdate::Salary(value) => self.draft.salary = value,
        }
    }

    /// Snapshot of the draft to be applied when the fade-out completes.
    ///
    /// ```rust
    /// use jobboard::app::filter::{FilterController, FilterUpdate};
    ///
    /// let mut filter = FilterController::new();
    /// filter.update_draft(FilterUpdate::CompanyName("Tech".into()));
    /// let snapshot = filter.commit_snapshot();
    ///
    /// filter.update_draft(FilterUpdate::CompanyName("Acme".into()));
    /// assert_eq!(snapshot.company_name, "Tech");
    /// assert!(filter.committed().is_empty());
    /// ```
    #[must_use]
    pub fn commit_snapshot(&self) -> FilterCriteria {
        self.draft.clone()
    }

    /// Makes a previously taken snapshot the committed filter.
    pub fn apply(&mut self, criteria: FilterCriteria) {
        tracing::debug!(
            company_name = %criteria.company_name,
            education = %criteria.education,
            salary = %criteria.salary,
            "filter committed"
        );
        self.committed = criteria;
    }

    #[must_use]
    pub const fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    #[must_use]
    pub const fn committed(&self) -> &FilterCriteria {
        &self.committed
    }
}

/// Steps an option selector through `Any` (empty) followed by every label of `table`.
///
/// A current value not present in the table restarts from `Any`.
#[must_use]
pub fn cycle_option(table: &LookupTable, current: &str, forward: bool) -> String {
    let options: Vec<&str> = std::iter::once("").chain(table.labels()).collect();
    let index = options.iter().position(|option| *option == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % options.len()
    } else {
        (index + options.len() - 1) % options.len()
    };
    options[next].to_string()
}
