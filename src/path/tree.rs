//! The compiled path tree.
//!
//! [`PathTree`] is the lookup structure the redaction walker traverses in
//! O(depth) per node instead of re-parsing path strings on every log call.
//! A node is either a [`PathTree::Leaf`] ("delete the field at this exact
//! location") or a [`PathTree::Branch`] with named children ("descend
//! further"); the sum type makes the leaf/branch duality explicit and rules
//! out a node being both.
//!
//! ```rust
//! use omission::{PathTree, omit};
//! use serde_json::json;
//!
//! let tree = PathTree::compile(["items.[].secret"]);
//!
//! let mut payload = json!({"items": [{"secret": 1, "id": 2}, {"secret": 3, "id": 4}]});
//! omit(&mut payload, &tree);
//! assert_eq!(payload, json!({"items": [{"id": 2}, {"id": 4}]}));
//! ```

use std::collections::BTreeMap;

use super::field_path::FieldPath;

// =============================================================================
// PathTree - Leaf/branch sum type
// =============================================================================

/// Compiled lookup tree driving redaction.
///
/// Built once per configuration via [`PathTree::compile`] and treated as
/// immutable afterwards, so any number of concurrent log calls can read it
/// without synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathTree {
    /// Terminal marker: the field at this exact location is to be deleted.
    Leaf,
    /// Internal node: redaction continues into the named children.
    Branch(BTreeMap<String, PathTree>),
}

impl PathTree {
    /// Compiles a collection of paths into a lookup tree.
    ///
    /// Paths containing the forbidden `__proto__` segment are silently
    /// discarded. The remaining paths are inserted in descending
    /// lexicographic order of their dotted form, so a path that is a strict
    /// prefix of another is inserted *after* its extensions and overwrites
    /// their partial subtree with a single leaf: an ancestor redaction
    /// always wins over a descendant redaction.
    ///
    /// Compiling an empty collection yields an empty tree (matches
    /// nothing); duplicate paths are idempotent; equal inputs compile to
    /// structurally equal trees.
    ///
    /// ```rust
    /// use omission::PathTree;
    ///
    /// // `a` wins over `a.b` regardless of input order.
    /// let ancestor_first = PathTree::compile(["a", "a.b"]);
    /// let descendant_first = PathTree::compile(["a.b", "a"]);
    /// assert_eq!(ancestor_first, descendant_first);
    /// ```
    #[must_use]
    pub fn compile<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldPath>,
    {
        let mut paths: Vec<FieldPath> = paths
            .into_iter()
            .map(Into::into)
            .filter(|path| !path.has_forbidden_segment())
            .collect();
        paths.sort_by(|a, b| b.dotted().cmp(&a.dotted()));

        let mut root = BTreeMap::new();
        for path in &paths {
            insert(&mut root, path.segments());
        }
        Self::Branch(root)
    }

    /// Whether this node is a terminal deletion marker.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Whether this node matches nothing at all.
    ///
    /// Only an empty branch matches nothing; a leaf matches the location it
    /// sits at.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf => false,
            Self::Branch(children) => children.is_empty(),
        }
    }

    /// Returns the subtree registered under `segment`, if any.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Leaf => None,
            Self::Branch(children) => children.get(segment),
        }
    }
}

/// Inserts one path into a branch, creating intermediate branches on demand.
///
/// The final segment always becomes a leaf, replacing any existing subtree
/// there. An existing leaf on an intermediate segment stops the insertion:
/// the whole subtree at that point is already scheduled for deletion, so the
/// longer path has nothing left to remove.
fn insert(node: &mut BTreeMap<String, PathTree>, segments: &[String]) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        node.insert(first.clone(), PathTree::Leaf);
        return;
    }
    match node
        .entry(first.clone())
        .or_insert_with(|| PathTree::Branch(BTreeMap::new()))
    {
        PathTree::Leaf => {}
        PathTree::Branch(children) => insert(children, rest),
    }
}
