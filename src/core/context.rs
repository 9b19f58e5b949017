//! Per-invocation tool context.
//!
//! Every dispatch builds a fresh `ToolContext` carrying a unique request id,
//! the timestamp the request was received, and a narrow logging surface.
//! A context lives for exactly one handler invocation and is dropped when
//! the call returns; it is never persisted or shared across calls.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Narrow logging surface handed to tool handlers.
///
/// Handlers may emit informational, warning, and error messages and nothing
/// else. The default implementation forwards to `tracing`; tests substitute
/// a capturing logger.
pub trait ToolLogger: Send + Sync {
    /// Emit an informational message.
    fn info(&self, message: &str);

    /// Emit a warning message.
    fn warn(&self, message: &str);

    /// Emit an error message.
    fn error(&self, message: &str);
}

/// Logger that forwards tool messages to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingToolLogger;

impl ToolLogger for TracingToolLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Ephemeral per-invocation data passed to every tool handler.
pub struct ToolContext {
    /// Unique identifier for the request being processed.
    pub request_id: String,

    /// Timestamp the request was received.
    pub received_at: DateTime<Utc>,

    /// Logging surface the handler may use.
    pub logger: Arc<dyn ToolLogger>,
}

impl ToolContext {
    /// Build a fresh context for a single dispatch.
    ///
    /// Request ids are random v4 UUIDs; a new one is generated per call and
    /// never reused, even for identical payloads.
    pub fn new(logger: Arc<dyn ToolLogger>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            logger,
        }
    }
}

impl fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolContext")
            .field("request_id", &self.request_id)
            .field("received_at", &self.received_at)
            .finish_non_exhaustive()
    }
}

/// Test logger that records every message it receives.
///
/// Shared by unit tests across the crate that assert on log output.
#[cfg(test)]
pub(crate) struct CaptureLogger {
    pub messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl CaptureLogger {
    pub(crate) fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl ToolLogger for CaptureLogger {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("INFO {message}"));
    }

    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("WARN {message}"));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("ERROR {message}"));
    }
}
