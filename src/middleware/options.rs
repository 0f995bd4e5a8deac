//! Configuration surface for the payload logger.
//!
//! Configuration is an explicit struct handed to [`crate::PayloadLogger::new`]
//! and validated once at that boundary: a sink that cannot receive messages
//! is rejected when the logger is built, never at the first log call.

use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::path::FieldPath;

// =============================================================================
// LogSink - Destination trait
// =============================================================================

/// A destination for redacted log messages.
///
/// Implemented for any `Fn(&Value) + Send + Sync` closure, so most callers
/// never implement it by hand. Implement it directly when the sink wraps a
/// resource that may be unavailable, and report that through
/// [`LogSink::is_ready`] so configuration can fail fast.
pub trait LogSink: Send + Sync {
    /// Receives one structured message.
    fn log(&self, message: &Value);

    /// Whether the sink can currently receive messages.
    ///
    /// Checked once, when the payload logger is configured.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<F> LogSink for F
where
    F: Fn(&Value) + Send + Sync,
{
    fn log(&self, message: &Value) {
        self(message);
    }
}

// =============================================================================
// Logger - Sink selection
// =============================================================================

/// Destination selection for redacted messages.
///
/// The default routes messages through the process's standard structured
/// logging channel (`tracing`); custom sinks wrap a [`LogSink`].
#[derive(Clone)]
pub struct Logger(LoggerKind);

#[derive(Clone)]
enum LoggerKind {
    Standard,
    Custom(Arc<dyn LogSink>),
}

impl Logger {
    /// The process's standard structured logging channel.
    #[must_use]
    pub fn standard() -> Self {
        Self(LoggerKind::Standard)
    }

    /// A caller-supplied sink.
    #[must_use]
    pub fn sink(sink: Arc<dyn LogSink>) -> Self {
        Self(LoggerKind::Custom(sink))
    }

    /// A caller-supplied closure sink.
    #[must_use]
    pub fn from_fn<F>(sink: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        Self(LoggerKind::Custom(Arc::new(sink)))
    }

    pub(crate) fn is_ready(&self) -> bool {
        match &self.0 {
            LoggerKind::Standard => true,
            LoggerKind::Custom(sink) => sink.is_ready(),
        }
    }

    pub(crate) fn log(&self, message: &Value) {
        match &self.0 {
            LoggerKind::Standard => tracing::info!(target: "omission", payload = %message),
            LoggerKind::Custom(sink) => sink.log(message),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            LoggerKind::Standard => f.write_str("Logger::Standard"),
            LoggerKind::Custom(_) => f.write_str("Logger::Custom"),
        }
    }
}

// =============================================================================
// Options - Configuration struct
// =============================================================================

/// A serialization customizer applied to every entry of the cloned message
/// before redaction runs.
///
/// Called with each entry's key (or decimal index inside sequences) and
/// value; returning `None` drops an object entry and nulls a sequence
/// element, mirroring serializer-replacer behavior.
pub type Replacer = Arc<dyn Fn(&str, &Value) -> Option<Value> + Send + Sync>;

/// Configuration for [`crate::PayloadLogger`].
///
/// All fields have working defaults: the standard logging channel, no
/// context fields, no omitted paths, no replacer.
#[derive(Clone, Default)]
pub struct Options {
    /// Destination for redacted messages.
    pub logger: Logger,
    /// Whether to merge the allow-listed invocation context fields into
    /// every message.
    pub aws_context: bool,
    /// Paths deleted from every message before it reaches the sink.
    pub omit_paths: Vec<FieldPath>,
    /// Optional serialization customizer.
    pub replacer: Option<Replacer>,
}

impl Options {
    /// Uses the given destination.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Enables or disables the allow-listed context fields.
    #[must_use]
    pub fn with_aws_context(mut self, enabled: bool) -> Self {
        self.aws_context = enabled;
        self
    }

    /// Uses the given omit paths.
    #[must_use]
    pub fn with_omit_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldPath>,
    {
        self.omit_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Uses the given serialization customizer.
    #[must_use]
    pub fn with_replacer<F>(mut self, replacer: F) -> Self
    where
        F: Fn(&str, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.replacer = Some(Arc::new(replacer));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("logger", &self.logger)
            .field("aws_context", &self.aws_context)
            .field("omit_paths", &self.omit_paths)
            .field("replacer", &self.replacer.as_ref().map(|_| ".."))
            .finish()
    }
}

// =============================================================================
// ConfigError - Configuration-time failures
// =============================================================================

/// Errors surfaced while the payload logger is configured.
///
/// Configuration errors are fatal to setup and never occur later: once
/// [`crate::PayloadLogger::new`] returns `Ok`, log calls cannot fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configured sink reported that it cannot receive messages.
    #[error("logger is not able to receive log messages")]
    InvalidLogger,
}
