//! JSON fixture catalog source.
//!
//! The catalog is parsed once, either from the fixture compiled into the
//! plugin or from a file named in the plugin configuration, and answered from
//! memory afterwards. Nothing is ever written back to disk.

use crate::catalog::models::{CatalogFixture, JobDetail, JobPage, JobQuery, JobSummary};
use crate::catalog::source::CatalogSource;
use crate::domain::error::{JobBoardError, Result};
use crate::domain::{Catalog, JobId, JobRecord, LookupEntry, LookupTable};
use std::path::{Path, PathBuf};

/// Fixture shipped with the plugin.
const EMBEDDED_FIXTURE: &str = include_str!("../../fixtures/catalog.json");

/// Catalog source backed by a parsed JSON fixture.
///
/// # File Format
///
/// ```json
/// {
///   "jobList": [
///     {
///       "companyName": "TechCorp",
///       "jobTitle": "Backend Engineer",
///       "educationId": 2,
///       "salaryId": 3,
///       "preview": "Own our billing services",
///       "companyPhoto": ["https://example.com/techcorp-1.jpg"],
///       "description": "<p>...</p>"
///     }
///   ],
///   "educationList": [{ "id": 2, "label": "Bachelor" }],
///   "salaryList": [{ "id": 3, "label": "60k - 80k" }]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    catalog: Catalog,
    origin: Option<PathBuf>,
}

impl JsonCatalog {
    /// Loads the fixture compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded fixture is not valid JSON.
    pub fn embedded() -> Result<Self> {
        tracing::debug!("loading embedded catalog fixture");
        Self::from_json(EMBEDDED_FIXTURE)
    }

    /// Loads a fixture file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jobboard::catalog::JsonCatalog;
    ///
    /// let source = JsonCatalog::from_path("/host/jobs.json")?;
    /// # Ok::<(), jobboard::JobBoardError>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog fixture from file");

        let contents = std::fs::read_to_string(path)?;
        let mut source = Self::from_json(&contents)?;
        source.origin = Some(path.to_path_buf());
        Ok(source)
    }

    /// Parses a fixture from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Catalog`] if the JSON does not match the fixture shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: CatalogFixture = serde_json::from_str(json)
            .map_err(|e| JobBoardError::Catalog(format!("failed to parse catalog fixture: {e}")))?;

        let jobs: Vec<JobRecord> = fixture
            .job_list
            .into_iter()
            .enumerate()
            .map(|(position, job)| job.into_record(position))
            .collect();

        let catalog = Catalog::new(
            jobs,
            LookupTable::new(fixture.education_list),
            LookupTable::new(fixture.salary_list),
        );

        tracing::debug!(
            jobs = catalog.len(),
            education_levels = catalog.education_levels().len(),
            salary_bands = catalog.salary_bands().len(),
            "catalog fixture parsed"
        );

        Ok(Self {
            catalog,
            origin: None,
        })
    }

    /// File the fixture was read from, `None` for the embedded fixture.
    #[must_use]
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    fn matches(job: &JobRecord, query: &JobQuery) -> bool {
        let company = query
            .company_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map_or(true, |name| job.company_name.contains(name));
        let education = query
            .education_level
            .filter(|id| *id != 0)
            .map_or(true, |id| job.education_id == id);
        let salary = query
            .salary_level
            .filter(|id| *id != 0)
            .map_or(true, |id| job.salary_id == id);

        company && education && salary
    }
}

impl CatalogSource for JsonCatalog {
    fn snapshot(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_snapshot").entered();
        Ok(self.catalog.clone())
    }

    fn query_jobs(&self, query: &JobQuery) -> Result<JobPage> {
        let _span = tracing::debug_span!("json_catalog_query_jobs",
            company_name = ?query.company_name,
            education_level = ?query.education_level,
            salary_level = ?query.salary_level,
            page = ?query.page,
            page_size = ?query.page_size
        ).entered();

        let matching: Vec<&JobRecord> = self
            .catalog
            .jobs()
            .iter()
            .filter(|job| Self::matches(job, query))
            .collect();
        let total = matching.len();

        let data: Vec<JobSummary> = match (query.page, query.page_size) {
            (Some(page), Some(page_size)) => {
                if page == 0 || page_size == 0 {
                    Vec::new()
                } else {
                    let size = page_size as usize;
                    let start = (page as usize - 1).saturating_mul(size);
                    matching
                        .into_iter()
                        .skip(start)
                        .take(size)
                        .map(JobSummary::from)
                        .collect()
                }
            }
            _ => matching.into_iter().map(JobSummary::from).collect(),
        };

        tracing::debug!(total, returned = data.len(), "jobs queried");
        Ok(JobPage { data, total })
    }

    fn job_detail(&self, id: JobId) -> Result<Option<JobDetail>> {
        let _span = tracing::debug_span!("json_catalog_job_detail", id = %id).entered();

        let detail = self.catalog.get(id).map(JobDetail::from);

        tracing::debug!(found = detail.is_some(), "job lookup complete");
        Ok(detail)
    }

    fn education_levels(&self) -> Result<Vec<LookupEntry>> {
        Ok(self.catalog.education_levels().entries().to_vec())
    }

    fn salary_bands(&self) -> Result<Vec<LookupEntry>> {
        Ok(self.catalog.salary_bands().entries().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "jobList": [
            { "companyName": "TechCorp", "jobTitle": "Backend Engineer", "educationId": 2, "salaryId": 1,
              "preview": "p1", "companyPhoto": ["a.jpg", "b.jpg"], "description": "<p>one</p>" },
            { "companyName": "BioTech", "jobTitle": "Lab Analyst", "educationId": 3, "salaryId": 2,
              "preview": "p2", "companyPhoto": [], "description": "two" },
            { "companyName": "Acme", "jobTitle": "Designer", "educationId": 2, "salaryId": 2,
              "preview": "p3", "companyPhoto": ["c.jpg"], "description": "three" }
        ],
        "educationList": [{ "id": 2, "label": "Bachelor" }, { "id": 3, "label": "Master" }],
        "salaryList": [{ "id": 1, "label": "40k - 60k" }, { "id": 2, "label": "60k - 80k" }]
    }"#;

    fn source() -> JsonCatalog {
        JsonCatalog::from_json(FIXTURE).unwrap()
    }

    #[test]
    fn empty_query_returns_everything_without_pagination() {
        let page = source().query_jobs(&JobQuery::default()).unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.data.len(), 3);
        assert_eq!(page.data[0].id, JobId(1));
        assert_eq!(page.data[2].company_name, "Acme");
    }

    #[test]
    fn company_filter_is_case_sensitive() {
        let source = source();

        let upper = source
            .query_jobs(&JobQuery { company_name: Some("Tech".into()), ..JobQuery::default() })
            .unwrap();
        let lower = source
            .query_jobs(&JobQuery { company_name: Some("tech".into()), ..JobQuery::default() })
            .unwrap();

        assert_eq!(upper.total, 2);
        assert_eq!(lower.total, 1);
        assert_eq!(lower.data[0].company_name, "BioTech");
    }

    #[test]
    fn zero_level_ids_mean_no_constraint() {
        let source = source();

        let any = source
            .query_jobs(&JobQuery { education_level: Some(0), salary_level: Some(0), ..JobQuery::default() })
            .unwrap();
        let bachelor_60k = source
            .query_jobs(&JobQuery { education_level: Some(2), salary_level: Some(2), ..JobQuery::default() })
            .unwrap();

        assert_eq!(any.total, 3);
        assert_eq!(bachelor_60k.total, 1);
        assert_eq!(bachelor_60k.data[0].company_name, "Acme");
    }

    #[test]
    fn pagination_requires_both_page_and_size() {
        let source = source();

        let only_page = source.query_jobs(&JobQuery { page: Some(2), ..JobQuery::default() }).unwrap();
        assert_eq!(only_page.data.len(), 3);

        let second = source
            .query_jobs(&JobQuery { page: Some(2), page_size: Some(2), ..JobQuery::default() })
            .unwrap();
        assert_eq!(second.total, 3);
        assert_eq!(second.data.len(), 1);
        assert_eq!(second.data[0].id, JobId(3));

        let past_end = source
            .query_jobs(&JobQuery { page: Some(5), page_size: Some(2), ..JobQuery::default() })
            .unwrap();
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.total, 3);
    }

    #[test]
    fn job_detail_omits_preview_and_signals_not_found() {
        let source = source();

        let detail = source.job_detail(JobId(1)).unwrap().unwrap();
        assert_eq!(detail.company_photos.len(), 2);
        assert_eq!(detail.description, "<p>one</p>");

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("preview").is_none());
        assert!(json.get("educationId").is_none());

        assert!(source.job_detail(JobId(99)).unwrap().is_none());
    }

    #[test]
    fn lookup_sets_are_returned_in_order() {
        let source = source();

        let levels = source.education_levels().unwrap();
        assert_eq!(levels.iter().map(|e| e.label.as_str()).collect::<Vec<_>>(), ["Bachelor", "Master"]);
        assert_eq!(source.salary_bands().unwrap().len(), 2);
    }

    #[test]
    fn from_path_reads_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let source = JsonCatalog::from_path(file.path()).unwrap();

        assert_eq!(source.origin(), Some(file.path()));
        assert_eq!(source.snapshot().unwrap().len(), 3);
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let err = JsonCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, JobBoardError::Catalog(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, JobBoardError::Io(_)));
    }

    #[test]
    fn embedded_fixture_parses() {
        let catalog = JsonCatalog::embedded().unwrap().snapshot().unwrap();
        assert_eq!(catalog.len(), 13);
        assert!(!catalog.education_levels().is_empty());
    }
}
