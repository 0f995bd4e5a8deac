//! Shape classification for traversal decisions.

use serde_json::Value;

/// The closed set of shapes the engine distinguishes when deciding whether
/// and how to recurse.
///
/// Everything that is not a plain keyed structure or a sequence is opaque:
/// there is nothing to descend into and nothing to delete by name, so
/// redaction at such a node is a defined no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueShape {
    /// A plain keyed structure whose entries can be removed by name.
    Keyed,
    /// An ordered sequence whose elements share one wildcard subtree.
    Sequence,
    /// A scalar or otherwise opaque value.
    Opaque,
}

impl ValueShape {
    /// Classifies a decoded value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Keyed,
            Value::Array(_) => Self::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Opaque,
        }
    }
}
