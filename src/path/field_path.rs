//! The `FieldPath` locator type.
//!
//! A path addresses a location inside a nested payload, either as a dotted
//! string (`"body.password"`) or as a pre-split segment list. The reserved
//! segment `[]` means "every element of the array at this position"; all
//! other segments compare as exact key names.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

/// Reserved segment meaning "every element of the enclosing array".
pub const WILDCARD_SEGMENT: &str = "[]";

/// Segment rejected during compilation.
///
/// In hosts with prototype-based object models a path containing this
/// segment can corrupt base-object behavior, so it has no legitimate target
/// and is never materialized as a tree key.
pub(crate) const FORBIDDEN_SEGMENT: &str = "__proto__";

// =============================================================================
// FieldPath - Dotted or segmented field locator
// =============================================================================

/// A dotted or segmented field locator, e.g. `body.password` or
/// `items.[].token`.
///
/// Paths are cheap to construct from strings, segment slices, or iterators,
/// and serialize to/from their dotted string form, so `omit_paths` lists can
/// live in configuration files.
///
/// ```rust
/// use omission::FieldPath;
///
/// let from_string = FieldPath::parse("body.password");
/// let from_segments = FieldPath::new(["body", "password"]);
/// assert_eq!(from_string, from_segments);
/// assert_eq!(from_string.to_string(), "body.password");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Constructs a path from an ordered sequence of segments.
    ///
    /// Segments are taken verbatim; no dot-splitting is applied.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a dotted path string into its segments.
    ///
    /// Splitting is purely syntactic: every `.` separates two segments, and
    /// segments are not validated beyond that. The wildcard segment `[]` is
    /// an ordinary segment at this level.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns the ordered segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the dotted string form, which is also the form used to order
    /// paths during compilation.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// Whether any segment is one the compiler refuses to materialize.
    pub(crate) fn has_forbidden_segment(&self) -> bool {
        self.segments.iter().any(|s| s == FORBIDDEN_SEGMENT)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl From<&str> for FieldPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl From<String> for FieldPath {
    fn from(dotted: String) -> Self {
        Self::parse(&dotted)
    }
}

impl From<&String> for FieldPath {
    fn from(dotted: &String) -> Self {
        Self::parse(dotted)
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldPathVisitor;

        impl<'de> Visitor<'de> for FieldPathVisitor {
            type Value = FieldPath;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a dotted path string or a sequence of path segments")
            }

            fn visit_str<E>(self, value: &str) -> Result<FieldPath, E>
            where
                E: de::Error,
            {
                Ok(FieldPath::parse(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<FieldPath, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut segments = Vec::new();
                while let Some(segment) = seq.next_element::<String>()? {
                    segments.push(segment);
                }
                Ok(FieldPath { segments })
            }
        }

        deserializer.deserialize_any(FieldPathVisitor)
    }
}
