//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/jobboard/jobboard-otlp.json`, one
//! OTLP document per line, rotated at 10MB with three backups kept. The
//! filter level is the `trace_level` plugin option, `info` when unset.
//!
//! - [`init`]: Subscriber installation
//! - [`exporter`]: Span exporter and OTLP JSON formatting
//! - [`file_writer`]: Rotating line writer

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;
