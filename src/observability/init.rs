//! Tracing subscriber setup.
//!
//! `tracing` spans and events are filtered by level, bridged into
//! OpenTelemetry, and written as OTLP JSON to a rotating file in the plugin's
//! data directory.

use super::exporter::{file_tracer_provider, SCOPE_NAME};
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "shelfscout-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level` (any `EnvFilter` directive,
/// `info` when unset). Traces go to
/// `~/.local/share/zellij/shelfscout/shelfscout-otlp.json`, seen from inside
/// the sandbox under `/host`.
///
/// Does nothing when the data directory cannot be created, and only the
/// first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)))
        .try_init();
}
