//! The payload logger and its pipeline hooks.
//!
//! One [`PayloadLogger`] is built per configuration; its hooks are called
//! from the hosting pipeline's interception points. Each hook builds a
//! message wrapper around the monitored field, clones it by serialization,
//! redacts the clone with the compiled tree, and hands it to the sink. The
//! caller's payload is only ever read.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{
    context::{AWS_CONTEXT_KEYS, pick},
    options::{ConfigError, Options, Replacer},
};
use crate::{
    path::PathTree,
    redaction::{ValueShape, omit},
};

const EVENT_FIELD: &str = "event";
const RESPONSE_FIELD: &str = "response";
const CONTEXT_FIELD: &str = "context";

// =============================================================================
// Invocation - The narrow interface consumed from the hosting pipeline
// =============================================================================

/// One unit of work flowing through the hosting pipeline.
///
/// This is the narrow slice of the pipeline's request structure the
/// middleware reads: the inbound event, the downstream stage's response once
/// it exists, and the runtime context. All three are the caller's own types;
/// they only need to serialize.
#[derive(Clone, Debug)]
pub struct Invocation<E, R = Value, C = Value> {
    /// The inbound event payload.
    pub event: E,
    /// The downstream response, absent until the downstream stage has run
    /// (and possibly forever on the error path).
    pub response: Option<R>,
    /// The runtime's invocation context, if the pipeline carries one.
    pub context: Option<C>,
}

impl<E> Invocation<E> {
    /// Starts an invocation from the inbound event alone.
    #[must_use]
    pub fn new(event: E) -> Self {
        Self {
            event,
            response: None,
            context: None,
        }
    }
}

impl<E, R, C> Invocation<E, R, C> {
    /// Records the downstream response.
    #[must_use]
    pub fn with_response(mut self, response: R) -> Self {
        self.response = Some(response);
        self
    }

    /// Attaches the runtime context.
    #[must_use]
    pub fn with_context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }
}

// =============================================================================
// PayloadLogger - Input/output logging middleware
// =============================================================================

/// Logs redacted copies of a pipeline's event and response payloads.
///
/// The omit-path tree is compiled once here and shared read-only by every
/// subsequent log call, from any number of threads.
///
/// ```rust
/// use std::sync::{Arc, Mutex};
///
/// use omission::{Invocation, Logger, Options, PayloadLogger};
/// use serde_json::json;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let logger = PayloadLogger::new(
///     Options::default()
///         .with_omit_paths(["response.headers.authorization"])
///         .with_logger(Logger::from_fn(move |message| {
///             sink.lock().unwrap().push(message.clone());
///         })),
/// )?;
///
/// let invocation = Invocation::new(json!({}))
///     .with_response(json!({"headers": {"authorization": "Bearer x", "etag": "abc"}}));
/// logger.after(&invocation);
///
/// assert_eq!(
///     *seen.lock().unwrap(),
///     vec![json!({"response": {"headers": {"etag": "abc"}}})]
/// );
/// # Ok::<(), omission::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct PayloadLogger {
    options: Options,
    tree: PathTree,
}

impl PayloadLogger {
    /// Builds the logger, validating the configuration eagerly.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidLogger`] when the configured sink reports that
    /// it cannot receive messages.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        if !options.logger.is_ready() {
            return Err(ConfigError::InvalidLogger);
        }
        let tree = PathTree::compile(options.omit_paths.clone());
        Ok(Self { options, tree })
    }

    /// "Before" hook: logs the inbound event.
    pub fn before<E, R, C>(&self, invocation: &Invocation<E, R, C>)
    where
        E: Serialize,
        C: Serialize,
    {
        self.emit(EVENT_FIELD, Some(&invocation.event), invocation.context.as_ref());
    }

    /// "After" hook: logs the downstream response.
    pub fn after<E, R, C>(&self, invocation: &Invocation<E, R, C>)
    where
        R: Serialize,
        C: Serialize,
    {
        self.emit(
            RESPONSE_FIELD,
            invocation.response.as_ref(),
            invocation.context.as_ref(),
        );
    }

    /// "On error" hook: logs the response only when the error path produced
    /// one; otherwise returns without touching the sink.
    pub fn on_error<E, R, C>(&self, invocation: &Invocation<E, R, C>)
    where
        R: Serialize,
        C: Serialize,
    {
        if invocation.response.is_none() {
            return;
        }
        self.after(invocation);
    }

    fn emit<T, C>(&self, field: &'static str, payload: Option<&T>, context: Option<&C>)
    where
        T: Serialize,
        C: Serialize,
    {
        let mut entries = Map::new();
        if let Some(payload) = payload {
            entries.insert(field.to_string(), safe_to_value(payload));
        }
        if self.options.aws_context {
            let picked = context.map_or_else(
                || Value::Object(Map::new()),
                |context| pick(&safe_to_value(context), &AWS_CONTEXT_KEYS),
            );
            entries.insert(CONTEXT_FIELD.to_string(), picked);
        }

        let mut message = Value::Object(entries);
        if let Some(replacer) = &self.options.replacer {
            apply_replacer(&mut message, replacer);
        }
        self.redact_group(&mut message, field);

        self.options.logger.log(&message);
    }

    /// Applies the compiled branch for one monitored field to the message.
    ///
    /// A leaf at the group level removes the whole field from the message;
    /// a branch walks the field's payload. Omit paths under other top-level
    /// groups have no effect on this message.
    fn redact_group(&self, message: &mut Value, field: &str) {
        let Value::Object(entries) = message else {
            return;
        };
        match self.tree.child(field) {
            Some(PathTree::Leaf) => {
                entries.remove(field);
            }
            Some(subtree) => {
                if let Some(payload) = entries.get_mut(field) {
                    omit(payload, subtree);
                }
            }
            None => {}
        }
    }
}

/// Serializes a payload into the disposable clone that redaction mutates.
///
/// The serialization round trip is what severs the clone from the caller's
/// data and strips anything without a JSON representation. A payload that
/// fails to serialize is substituted by a placeholder string carrying the
/// error: logging is never allowed to crash the surrounding pipeline.
fn safe_to_value<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or_else(|err| {
        tracing::warn!(target: "omission", error = %err, "substituting placeholder for unserializable payload");
        Value::String(format!("Failed to serialize payload: {err}"))
    })
}

/// Applies the configured replacer to every entry of the message, top-down.
///
/// Object entries dropped by the replacer disappear; sequence elements
/// dropped by it become null, matching serializer-replacer behavior.
fn apply_replacer(value: &mut Value, replacer: &Replacer) {
    match ValueShape::of(value) {
        ValueShape::Keyed => {
            if let Value::Object(entries) = value {
                let keys: Vec<String> = entries.keys().cloned().collect();
                for key in keys {
                    let Some(current) = entries.get(&key) else {
                        continue;
                    };
                    match replacer(&key, current) {
                        Some(mut replacement) => {
                            apply_replacer(&mut replacement, replacer);
                            entries.insert(key, replacement);
                        }
                        None => {
                            entries.remove(&key);
                        }
                    }
                }
            }
        }
        ValueShape::Sequence => {
            if let Value::Array(items) = value {
                for (index, item) in items.iter_mut().enumerate() {
                    *item = replacer(&index.to_string(), item).unwrap_or(Value::Null);
                    apply_replacer(item, replacer);
                }
            }
        }
        ValueShape::Opaque => {}
    }
}
