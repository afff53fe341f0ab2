//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker that answers catalog queries. It
//! also carries distributed tracing context across the thread boundary.

use crate::catalog::{JobDetail, JobPage, JobQuery};
use crate::domain::{Catalog, JobId, LookupEntry};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if no subscriber is installed or the current span
    /// context is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jobboard::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("Trace ID: {}", ctx.trace_id);
    /// }
    /// ```
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id = format!("{:032x}", span_context.trace_id());
            let parent_span_id = format!("{:016x}", span_context.span_id());

            tracing::trace!(trace_id = %trace_id, parent_span_id = %parent_span_id, "capturing trace context");

            Some(Self {
                trace_id,
                parent_span_id,
            })
        } else {
            None
        }
    }
}

/// Generates builder methods for `WorkerMessage` variants.
///
/// Each builder attaches the current trace context to the message.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { catalog_file: Option<String> }),
    query_jobs(QueryJobs { query: JobQuery }),
    fetch_job_detail(FetchJobDetail { id: JobId }),
    list_education_levels(ListEducationLevels {}),
    list_salary_bands(ListSalaryBands {}),
}

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the catalog and return a full snapshot.
    LoadCatalog {
        /// Fixture file to read; the embedded fixture when `None`.
        catalog_file: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Filter and optionally paginate the job list.
    QueryJobs {
        query: JobQuery,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Look up the detail view of one record.
    FetchJobDetail {
        id: JobId,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    ListEducationLevels {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    ListSalaryBands {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached when the message was built.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. }
            | Self::QueryJobs { trace_context, .. }
            | Self::FetchJobDetail { trace_context, .. }
            | Self::ListEducationLevels { trace_context }
            | Self::ListSalaryBands { trace_context } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog was loaded.
    CatalogLoaded {
        catalog: Catalog,

        /// Unix timestamp of the load.
        loaded_at: i64,
    },

    JobsQueried {
        page: JobPage,
    },

    /// Detail lookup finished; `detail` is `None` when no record has that id.
    JobDetailFetched {
        id: JobId,
        detail: Option<JobDetail>,
    },

    EducationLevelsListed {
        levels: Vec<LookupEntry>,
    },

    SalaryBandsListed {
        bands: Vec<LookupEntry>,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_trace_context_empty_without_subscriber() {
        let message = WorkerMessage::fetch_job_detail(JobId(4));

        assert!(message.trace_context().is_none());
        assert_eq!(
            message,
            WorkerMessage::FetchJobDetail {
                id: JobId(4),
                trace_context: None
            }
        );
    }

    #[test]
    fn messages_survive_json_transport() {
        let message = WorkerMessage::query_jobs(JobQuery {
            company_name: Some("Tech".into()),
            page: Some(1),
            page_size: Some(6),
            ..JobQuery::default()
        });

        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));

        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }
}
