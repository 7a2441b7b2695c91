//! Metric instrument factories for queue-lab.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! Without an OTLP endpoint the global provider is a no-op.

use opentelemetry::KeyValue;
use opentelemetry::metrics::{Counter, Histogram, Meter};

use crate::model::QueueKind;

/// Returns the shared meter for queue-lab instruments.
fn meter() -> Meter {
    opentelemetry::global::meter("queue-lab")
}

/// Counter: queue operations (insert, delete, display).
/// Labels: `kind`, `operation`, `result` ("ok" | "full" | "empty" | "invalid_size" | "alloc_failed").
pub fn queue_operations() -> Counter<u64> {
    meter()
        .u64_counter("queue.operations")
        .with_description("Number of queue operations")
        .build()
}

/// Counter: buffer growth attempts.
/// Labels: `kind`, `result`.
pub fn queue_growths() -> Counter<u64> {
    meter()
        .u64_counter("queue.growths")
        .with_description("Number of buffer growth attempts")
        .build()
}

/// Histogram: capacity after construction or growth.
/// Labels: `kind`.
pub fn queue_capacity() -> Histogram<f64> {
    meter()
        .f64_histogram("queue.capacity")
        .with_description("Queue capacity in slots")
        .with_unit("{slot}")
        .build()
}

/// Count one operation.
pub fn record_operation(kind: QueueKind, operation: &'static str, result: &'static str) {
    queue_operations().add(
        1,
        &[
            KeyValue::new("kind", kind.as_str()),
            KeyValue::new("operation", operation),
            KeyValue::new("result", result),
        ],
    );
}

/// Count one growth attempt, and record the new capacity when it succeeded.
pub fn record_growth(kind: QueueKind, result: &'static str, capacity: Option<usize>) {
    queue_growths().add(
        1,
        &[
            KeyValue::new("kind", kind.as_str()),
            KeyValue::new("result", result),
        ],
    );
    if let Some(capacity) = capacity {
        record_capacity(kind, capacity);
    }
}

pub fn record_capacity(kind: QueueKind, capacity: usize) {
    queue_capacity().record(capacity as f64, &[KeyValue::new("kind", kind.as_str())]);
}
