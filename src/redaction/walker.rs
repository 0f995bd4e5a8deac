//! The recursive redaction walker.

use serde_json::Value;

use super::shape::ValueShape;
use crate::path::{PathTree, WILDCARD_SEGMENT};

/// Deletes every field of `value` matched by `tree`, in place.
///
/// `value` must be a disposable clone: deletion is destructive on the
/// passed-in value only, and the walker assumes the caller has already
/// severed it from anything the rest of the pipeline still reads.
///
/// Traversal by shape at each node:
///
/// - sequence + wildcard child: every element is walked with the wildcard
///   subtree; non-wildcard keys are meaningless against a sequence and are
///   ignored,
/// - keyed object: a leaf child deletes the entry, a branch child recurses
///   into the entry when it exists,
/// - opaque value: no-op.
///
/// Only keys named in the tree are touched; absent keys are silently
/// skipped. A leaf at the top level is also a no-op: a value cannot delete
/// itself, so whole-value removal belongs to whoever owns the surrounding
/// container.
///
/// ```rust
/// use omission::{PathTree, omit};
/// use serde_json::json;
///
/// let tree = PathTree::compile(["body.password"]);
/// let mut payload = json!({"body": {"password": "x", "user": "a"}});
/// omit(&mut payload, &tree);
/// assert_eq!(payload, json!({"body": {"user": "a"}}));
/// ```
pub fn omit(value: &mut Value, tree: &PathTree) {
    let PathTree::Branch(children) = tree else {
        return;
    };
    match ValueShape::of(value) {
        ValueShape::Sequence => {
            let Some(subtree) = children.get(WILDCARD_SEGMENT) else {
                return;
            };
            if let Value::Array(items) = value {
                for item in items {
                    omit(item, subtree);
                }
            }
        }
        ValueShape::Keyed => {
            if let Value::Object(map) = value {
                for (key, subtree) in children {
                    match subtree {
                        PathTree::Leaf => {
                            map.remove(key);
                        }
                        PathTree::Branch(_) => {
                            if let Some(entry) = map.get_mut(key) {
                                omit(entry, subtree);
                            }
                        }
                    }
                }
            }
        }
        ValueShape::Opaque => {}
    }
}
