//! Subscriber setup: `tracing` spans → OpenTelemetry → rotating OTLP JSON file.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "jobboard";
const TRACE_FILE: &str = "jobboard-otlp.json";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// The filter comes from `trace_level` (default `info`). Spans go to
/// `jobboard-otlp.json` in the plugin data directory. Tracing is optional:
/// when the directory cannot be created this returns without installing
/// anything, and repeated calls keep the first subscriber.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
