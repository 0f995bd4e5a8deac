//! Adapter for emitting redacted messages through `slog`.
//!
//! This module exists to connect the payload logger's sink boundary with
//! `slog` by forwarding messages as structured JSON via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the already-redacted message the
//!   middleware produced, carried as a nested value rather than a flat
//!   string.
//!
//! It does not configure `slog`, build drains, or decide what gets
//! redacted.

use std::sync::Arc;

use serde_json::Value;

use crate::middleware::{LogSink, Logger};

/// [`LogSink`] that forwards messages to an `slog::Logger`.
///
/// Each message is emitted as one `INFO` record with the full redacted
/// message attached under the `message` key as nested JSON.
///
/// ## Example
/// ```ignore
/// use omission::{Logger, Options, PayloadLogger};
///
/// let options = Options::default().with_logger(Logger::from(slog_logger));
/// let logger = PayloadLogger::new(options)?;
/// ```
pub struct SlogSink {
    logger: slog::Logger,
}

impl SlogSink {
    /// Wraps an `slog::Logger` as a message sink.
    #[must_use]
    pub fn new(logger: slog::Logger) -> Self {
        Self { logger }
    }
}

impl LogSink for SlogSink {
    fn log(&self, message: &Value) {
        slog::info!(self.logger, "payload"; "message" => slog::Serde(message.clone()));
    }
}

impl From<slog::Logger> for Logger {
    fn from(logger: slog::Logger) -> Self {
        Self::sink(Arc::new(SlogSink::new(logger)))
    }
}
