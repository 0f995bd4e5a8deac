//! Allow-listed invocation context fields.
//!
//! When `aws_context` is enabled, a fixed subset of the hosting runtime's
//! invocation context is merged into every message under the `context` key.
//! Only the keys below survive; everything else the context carries stays
//! out of the logs.

use serde_json::{Map, Value};

use crate::redaction::ValueShape;

/// Context keys copied into messages, as documented for the Lambda Node.js
/// context object.
///
/// <https://docs.aws.amazon.com/lambda/latest/dg/nodejs-context.html>
pub const AWS_CONTEXT_KEYS: [&str; 10] = [
    "functionName",
    "functionVersion",
    "invokedFunctionArn",
    "memoryLimitInMB",
    "awsRequestId",
    "logGroupName",
    "logStreamName",
    "identity",
    "clientContext",
    "callbackWaitsForEmptyEventLoop",
];

/// Copies the allow-listed keys out of a serialized context.
///
/// Only supports first-level keys. A context that is not a keyed structure
/// yields an empty object; absent keys are skipped.
pub(crate) fn pick(context: &Value, keys: &[&str]) -> Value {
    let mut picked = Map::new();
    if ValueShape::of(context) == ValueShape::Keyed {
        if let Value::Object(entries) = context {
            for key in keys {
                if let Some(value) = entries.get(*key) {
                    picked.insert((*key).to_string(), value.clone());
                }
            }
        }
    }
    Value::Object(picked)
}
