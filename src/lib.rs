//! Path-based omission of sensitive fields from structured log payloads.
//!
//! This crate separates:
//! - **Path compilation**: the `omit_paths` configuration is compiled once
//!   into a [`PathTree`], with ancestor paths winning over descendant paths
//!   and the `[]` segment addressing every element of an array.
//! - **Redaction traversal**: the [`omit`] walker deletes tree-matched
//!   fields from a disposable clone of the payload on every log call.
//! - **Orchestration**: the [`PayloadLogger`] middleware hooks
//!   ([`PayloadLogger::before`], [`PayloadLogger::after`],
//!   [`PayloadLogger::on_error`]) clone, redact, and hand messages to the
//!   configured sink.
//!
//! What this crate does:
//! - compiles dotted field paths into a lookup tree traversable in O(depth)
//! - deletes matched fields from a serialization-cloned copy, never from
//!   the caller's data
//! - merges an allow-listed subset of the invocation context into messages
//! - provides sink integrations behind feature flags (e.g. `slog`)
//!
//! What it does not do:
//! - parse or pretty-print raw JSON text (it is handed decoded values)
//! - validate what the sink does with a message
//! - support path expressions beyond dotted segments and the `[]` wildcard
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use omission::{Invocation, Logger, Options, PayloadLogger};
//! use serde_json::json;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let logger = PayloadLogger::new(
//!     Options::default()
//!         .with_omit_paths(["event.body.password"])
//!         .with_logger(Logger::from_fn(move |message| {
//!             sink.lock().unwrap().push(message.clone());
//!         })),
//! )?;
//!
//! let invocation = Invocation::new(json!({"body": {"password": "x", "user": "a"}}));
//! logger.before(&invocation);
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec![json!({"event": {"body": {"user": "a"}}})]
//! );
//! # Ok::<(), omission::ConfigError>(())
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Module declarations
pub mod middleware;
pub mod path;
pub mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports from the path module
pub use path::{FieldPath, PathTree, WILDCARD_SEGMENT};
// Re-exports from the redaction module
pub use redaction::{ValueShape, omit};
// Re-exports from the middleware module
pub use middleware::{
    AWS_CONTEXT_KEYS, ConfigError, Invocation, LogSink, Logger, Options, PayloadLogger, Replacer,
};
