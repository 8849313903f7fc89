//! Span and timing helpers for formatting operations.

use tracing::{debug_span, Span};

/// Create a span covering one pattern rewrite.
pub fn rewrite_span(pattern_len: usize, arguments: usize) -> Span {
    debug_span!("rewrite", pattern_len, arguments)
}

/// Create a span covering one format call.
pub fn format_span(locale: &str, rewrite: bool) -> Span {
    debug_span!("format", locale = %locale, rewrite, error = tracing::field::Empty)
}

/// Record an error on the current span.
pub fn record_error(error: &dyn std::error::Error) {
    Span::current().record("error", tracing::field::display(error));
}

/// Timing utility for operations.
pub struct Timer {
    start: std::time::Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    /// Elapsed time so far.
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }

    /// Complete the timer and record duration.
    pub fn finish(self) {
        tracing::trace!(
            operation = %self.operation,
            duration_us = %self.start.elapsed().as_micros(),
            "operation completed"
        );
    }
}

/// Macro for timing a block of code.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
