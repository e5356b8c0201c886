use tracing::{Span, field};

use super::TraceId;

/// Root span for one prediction request (CLI invocation or interactive turn).
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "root",
        name = %name,
        trace_id = %trace_id,
        entries = field::Empty
    )
}

/// Child span; inherits the trace id from the enclosing root span.
pub fn child_span(name: &'static str) -> Span {
    tracing::info_span!("child", name = %name)
}
