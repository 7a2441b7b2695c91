//! Queue session span helpers.

use tracing::Span;

use crate::model::QueueKind;

/// Start a span covering one interactive queue session.
///
/// The `queue.capacity` field is updated via [`record_growth`].
pub fn start_session_span(kind: QueueKind, capacity: usize) -> Span {
    tracing::info_span!(
        "queue.session",
        "queue.kind" = kind.as_str(),
        "queue.capacity" = capacity,
    )
}

/// Record a capacity change on the session span.
pub fn record_growth(span: &Span, from: usize, to: usize) {
    span.record("queue.capacity", to);
    span.in_scope(|| {
        tracing::info!(from, to, "capacity_changed");
    });
}

/// Record an operation outcome as an event scoped to the session span.
pub fn record_operation(span: &Span, operation: &str, outcome: &str) {
    span.in_scope(|| {
        tracing::debug!(operation, outcome, "queue_operation");
    });
}
