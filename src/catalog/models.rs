//! Wire and fixture types for the catalog source.
//!
//! These types mirror the JSON shapes of the fixture file and of the query
//! surface, kept apart from the domain [`JobRecord`] so the domain type can
//! carry an assigned [`JobId`] the fixture does not have.

use crate::domain::{JobId, JobRecord, LookupEntry};
use serde::{Deserialize, Serialize};

/// Top-level shape of the catalog fixture file.
///
/// ```json
/// {
///   "jobList": [{ "companyName": "...", "jobTitle": "...", "educationId": 1, ... }],
///   "educationList": [{ "id": 1, "label": "High school" }],
///   "salaryList": [{ "id": 1, "label": "30k - 40k" }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFixture {
    #[serde(default)]
    pub job_list: Vec<FixtureJob>,
    #[serde(default)]
    pub education_list: Vec<LookupEntry>,
    #[serde(default)]
    pub salary_list: Vec<LookupEntry>,
}

/// A job as stored in the fixture, without an identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureJob {
    pub company_name: String,
    pub job_title: String,
    pub education_id: u32,
    pub salary_id: u32,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub company_photo: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl FixtureJob {
    /// Attaches the positional id for the record at `position`.
    #[must_use]
    pub fn into_record(self, position: usize) -> JobRecord {
        JobRecord {
            id: JobId::from_position(position),
            company_name: self.company_name,
            job_title: self.job_title,
            education_id: self.education_id,
            salary_id: self.salary_id,
            preview: self.preview,
            company_photos: self.company_photo,
            description: self.description,
        }
    }
}

/// Query accepted by [`CatalogSource::query_jobs`](super::CatalogSource::query_jobs).
///
/// Every field is optional. `education_level` and `salary_level` of `0` mean
/// "no constraint". Pagination applies only when both `page` and `page_size`
/// are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// List entry returned by a query: the record without photos or description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: JobId,
    pub company_name: String,
    pub job_title: String,
    pub education_id: u32,
    pub salary_id: u32,
    pub preview: String,
}

impl From<&JobRecord> for JobSummary {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.id,
            company_name: job.company_name.clone(),
            job_title: job.job_title.clone(),
            education_id: job.education_id,
            salary_id: job.salary_id,
            preview: job.preview.clone(),
        }
    }
}

/// Detail view of a record: everything except preview text and classification ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: JobId,
    pub company_name: String,
    pub job_title: String,
    #[serde(rename = "companyPhoto")]
    pub company_photos: Vec<String>,
    pub description: String,
}

impl From<&JobRecord> for JobDetail {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.id,
            company_name: job.company_name.clone(),
            job_title: job.job_title.clone(),
            company_photos: job.company_photos.clone(),
            description: job.description.clone(),
        }
    }
}

/// One page of query results plus the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPage {
    pub data: Vec<JobSummary>,
    pub total: usize,
}
