//! Input/output logging middleware built on the redaction engine.
//!
//! This module provides:
//!
//! - **`options`**: The [`Options`] configuration struct, the [`Logger`]
//!   sink selection type, the [`LogSink`] trait, and the configuration
//!   error kind.
//! - **`context`**: The allow-listed invocation context fields merged into
//!   messages when `aws_context` is enabled.
//! - **`payload_logger`**: The [`PayloadLogger`] itself and the
//!   [`Invocation`] structure it consumes from the hosting pipeline.
//!
//! The middleware is thin orchestration around the core: it clones payloads
//! by serializing them, runs the walker over the clone, and hands the result
//! to the sink. It never mutates the caller's data and never lets a logging
//! failure escape into the surrounding pipeline.

mod context;
mod options;
mod payload_logger;

pub use context::AWS_CONTEXT_KEYS;
pub use options::{ConfigError, LogSink, Logger, Options, Replacer};
pub use payload_logger::{Invocation, PayloadLogger};
