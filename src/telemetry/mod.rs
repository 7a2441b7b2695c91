//! Logging and OpenTelemetry export.
//!
//! Log output always goes to stderr, because stdout belongs to the menu.
//! With an OTLP endpoint configured, session spans and the queue metrics
//! in [`metrics`] are exported as well.

pub mod metrics;
pub mod queue;

use opentelemetry_sdk::Resource;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;

use crate::config::Config;
use crate::error::{Error, Result};

const TRACER_NAME: &str = "queue-lab";

/// Settings for [`init_telemetry`].
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// OTLP gRPC endpoint (e.g. "http://localhost:4317"). `None` keeps
    /// everything local.
    pub endpoint: Option<String>,
    pub service_name: String,
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "queue_lab=debug").
    pub log_level: String,
}

impl TelemetryConfig {
    /// Telemetry settings for `service_name` from loaded configuration.
    pub fn from_config(config: &Config, service_name: impl Into<String>) -> Self {
        Self {
            endpoint: config.otel_endpoint.clone(),
            service_name: service_name.into(),
            log_level: config.effective_log_level().to_string(),
        }
    }
}

/// Holds the OTLP providers, if any. Dropping it shuts them down.
#[derive(Default)]
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
    meter_provider: Option<SdkMeterProvider>,
}

impl TelemetryGuard {
    /// Whether spans and metrics leave the process.
    pub fn is_exporting(&self) -> bool {
        self.tracer_provider.is_some() && self.meter_provider.is_some()
    }

    /// Push buffered spans and metrics to the collector.
    pub fn force_flush(&self) {
        if let Some(ref provider) = self.tracer_provider {
            let _ = provider.force_flush();
        }
        if let Some(ref provider) = self.meter_provider {
            let _ = provider.force_flush();
        }
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.meter_provider.take() {
            let _ = provider.shutdown();
        }
        if let Some(provider) = self.tracer_provider.take() {
            let _ = provider.shutdown();
        }
    }
}

/// Build OTLP span and metric providers for `config.endpoint`.
///
/// Nothing is installed globally. Without an endpoint the guard is empty.
/// The tonic channel connects lazily, so this succeeds without a reachable
/// collector, but it must run inside a tokio runtime.
pub fn build_exporters(config: &TelemetryConfig) -> Result<TelemetryGuard> {
    use opentelemetry_otlp::WithExportConfig as _;

    let Some(ref endpoint) = config.endpoint else {
        return Ok(TelemetryGuard::default());
    };

    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .build();

    let spans = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| Error::Other(format!("OTLP span exporter for {endpoint}: {e}")))?;
    let tracer_provider = SdkTracerProvider::builder()
        .with_batch_exporter(spans)
        .with_resource(resource.clone())
        .build();

    let metrics = opentelemetry_otlp::MetricExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| Error::Other(format!("OTLP metric exporter for {endpoint}: {e}")))?;
    let meter_provider = SdkMeterProvider::builder()
        .with_periodic_exporter(metrics)
        .with_resource(resource)
        .build();

    Ok(TelemetryGuard {
        tracer_provider: Some(tracer_provider),
        meter_provider: Some(meter_provider),
    })
}

/// Install the global subscriber (and meter provider when exporting).
///
/// Keep the returned guard alive until the session ends.
///
/// # Errors
///
/// Exporter construction failures, or a subscriber already being set.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard> {
    use opentelemetry::trace::TracerProvider as _;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let guard = build_exporters(&config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let stderr = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let otel = guard
        .tracer_provider
        .as_ref()
        .map(|provider| tracing_opentelemetry::layer().with_tracer(provider.tracer(TRACER_NAME)));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(otel)
        .try_init()
        .map_err(|e| Error::Other(format!("failed to init tracing subscriber: {e}")))?;

    if let Some(ref provider) = guard.meter_provider {
        opentelemetry::global::set_meter_provider(provider.clone());
    }

    Ok(guard)
}
