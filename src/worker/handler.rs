//! Worker thread implementation answering catalog queries.
//!
//! The worker owns the [`CatalogSource`] so that fixture parsing never blocks
//! the plugin's render loop. The source is created lazily: by the first
//! `LoadCatalog` message, or from the embedded fixture if a query arrives
//! first.

use crate::catalog::{CatalogSource, JobQuery, JsonCatalog};
use crate::domain::error::{JobBoardError, Result};
use crate::domain::JobId;
use crate::infrastructure::paths;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};

/// Worker thread state.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread.
#[derive(Serialize, Deserialize, Default)]
pub struct JobBoardWorker {
    #[serde(skip)]
    source: Option<Box<dyn CatalogSource>>,
}

impl JobBoardWorker {
    /// Creates a worker over an existing source.
    #[must_use]
    pub fn with_source(source: Box<dyn CatalogSource>) -> Self {
        Self { source: Some(source) }
    }

    /// Opens the fixture named by `catalog_file`, or the embedded one.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be read or parsed.
    pub fn open_source(catalog_file: Option<&str>) -> Result<Box<dyn CatalogSource>> {
        let source = match catalog_file {
            Some(file) => JsonCatalog::from_path(paths::expand_tilde(file))?,
            None => JsonCatalog::embedded()?,
        };
        Ok(Box::new(source))
    }

    fn get_source(&mut self) -> Result<&dyn CatalogSource> {
        if self.source.is_none() {
            tracing::debug!("no catalog source yet, falling back to embedded fixture");
            self.source = Some(Self::open_source(None)?);
        }
        self.source
            .as_deref()
            .ok_or_else(|| JobBoardError::Worker("catalog source not initialized".to_string()))
    }

    /// Standardizes logging and error conversion for every catalog operation.
    fn handle_catalog_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "catalog operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "catalog operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_catalog(&mut self, catalog_file: Option<&str>) -> WorkerResponse {
        let result = Self::open_source(catalog_file).and_then(|source| {
            let catalog = source.snapshot()?;
            self.source = Some(source);
            Ok(catalog)
        });

        Self::handle_catalog_result("load catalog", result, |catalog| {
            tracing::info!(jobs = catalog.len(), catalog_file = ?catalog_file, "catalog loaded");
            WorkerResponse::CatalogLoaded {
                catalog,
                loaded_at: chrono::Utc::now().timestamp(),
            }
        })
    }

    fn handle_query_jobs(&mut self, query: &JobQuery) -> WorkerResponse {
        Self::handle_catalog_result(
            "query jobs",
            self.get_source().and_then(|source| source.query_jobs(query)),
            |page| WorkerResponse::JobsQueried { page },
        )
    }

    fn handle_fetch_job_detail(&mut self, id: JobId) -> WorkerResponse {
        Self::handle_catalog_result(
            "fetch job detail",
            self.get_source().and_then(|source| source.job_detail(id)),
            |detail| WorkerResponse::JobDetailFetched { id, detail },
        )
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog { catalog_file, .. } => self.handle_load_catalog(catalog_file.as_deref()),
            WorkerMessage::QueryJobs { query, .. } => self.handle_query_jobs(&query),
            WorkerMessage::FetchJobDetail { id, .. } => self.handle_fetch_job_detail(id),
            WorkerMessage::ListEducationLevels { .. } => Self::handle_catalog_result(
                "list education levels",
                self.get_source().and_then(|source| source.education_levels()),
                |levels| WorkerResponse::EducationLevelsListed { levels },
            ),
            WorkerMessage::ListSalaryBands { .. } => Self::handle_catalog_result(
                "list salary bands",
                self.get_source().and_then(|source| source.salary_bands()),
                |bands| WorkerResponse::SalaryBandsListed { bands },
            ),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod zellij_bridge {
    use super::JobBoardWorker;
    use crate::worker::{WorkerMessage, WorkerResponse};
    use zellij_tile::prelude::{PluginMessage, ZellijWorker};
    use zellij_tile::shim::post_message_to_plugin;

    /// Tracks whether worker tracing has been initialized.
    static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

    /// Sets up the same tracing configuration as the main thread so both
    /// threads write to the same trace file.
    fn init_worker_tracing() {
        let config = crate::Config::default();
        crate::observability::init_tracing(&config);
    }

    fn post_response(name: String, response: &WorkerResponse) {
        match serde_json::to_string(response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }

    impl ZellijWorker<'_> for JobBoardWorker {
        /// Deserializes the payload, handles it and posts the response back
        /// under the same message name.
        fn on_message(&mut self, message: String, payload: String) {
            if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
                init_worker_tracing();
            }

            let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker message");
                    post_response(
                        message,
                        &WorkerResponse::Error {
                            message: format!("malformed worker message: {e}"),
                        },
                    );
                    return;
                }
            };

            let response = self.handle_message(worker_message);
            post_response(message, &response);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_catalog_uses_embedded_fixture_by_default() {
        let mut worker = JobBoardWorker::default();

        let response = worker.handle_message(WorkerMessage::load_catalog(None));

        let WorkerResponse::CatalogLoaded { catalog, loaded_at } = response else {
            panic!("unexpected response: {response:?}");
        };
        assert_eq!(catalog.len(), 13);
        assert!(loaded_at > 0);
    }

    #[test]
    fn load_catalog_reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{ "jobList": [{ "companyName": "Solo", "jobTitle": "Only", "educationId": 1, "salaryId": 1 }] }"#,
        )
        .unwrap();

        let mut worker = JobBoardWorker::default();
        let path = file.path().to_string_lossy().to_string();
        let response = worker.handle_message(WorkerMessage::load_catalog(Some(path)));

        let WorkerResponse::CatalogLoaded { catalog, .. } = response else {
            panic!("unexpected response: {response:?}");
        };
        assert_eq!(catalog.jobs()[0].company_name, "Solo");
    }

    #[test]
    fn missing_catalog_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json").to_string_lossy().to_string();

        let mut worker = JobBoardWorker::default();
        let response = worker.handle_message(WorkerMessage::load_catalog(Some(path)));

        assert!(matches!(response, WorkerResponse::Error { ref message } if message.starts_with("load catalog")));
    }

    #[test]
    fn queries_are_answered_from_the_source() {
        let mut worker = JobBoardWorker::default();

        let response = worker.handle_message(WorkerMessage::query_jobs(JobQuery {
            company_name: Some("Tech".into()),
            ..JobQuery::default()
        }));
        let WorkerResponse::JobsQueried { page } = response else {
            panic!("unexpected response: {response:?}");
        };
        let companies: Vec<&str> = page.data.iter().map(|job| job.company_name.as_str()).collect();
        assert_eq!(companies, ["TechCorp", "BioTech"]);
    }

    #[test]
    fn injected_source_is_used_without_loading() {
        let source = JsonCatalog::from_json(
            r#"{ "jobList": [{ "companyName": "Injected", "jobTitle": "Tester", "educationId": 1, "salaryId": 1 }] }"#,
        )
        .unwrap();
        let mut worker = JobBoardWorker::with_source(Box::new(source));

        let WorkerResponse::JobsQueried { page } = worker.handle_message(WorkerMessage::query_jobs(JobQuery::default()))
        else {
            panic!("expected a job page");
        };
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].company_name, "Injected");
    }

    #[test]
    fn unknown_detail_id_is_explicit_not_found() {
        let mut worker = JobBoardWorker::default();

        let response = worker.handle_message(WorkerMessage::fetch_job_detail(JobId(500)));

        assert_eq!(
            response,
            WorkerResponse::JobDetailFetched {
                id: JobId(500),
                detail: None
            }
        );
    }

    #[test]
    fn lookup_sets_are_listed() {
        let mut worker = JobBoardWorker::default();

        let WorkerResponse::EducationLevelsListed { levels } = worker.handle_message(WorkerMessage::list_education_levels())
        else {
            panic!("expected education levels");
        };
        let WorkerResponse::SalaryBandsListed { bands } = worker.handle_message(WorkerMessage::list_salary_bands()) else {
            panic!("expected salary bands");
        };

        assert_eq!(levels.len(), 5);
        assert_eq!(bands.len(), 5);
    }
}
