//! Field paths and their compiled lookup tree.
//!
//! This module provides:
//!
//! - **`field_path`**: The [`FieldPath`] locator type (dotted strings or
//!   pre-split segment lists, plus the reserved array-wildcard segment).
//! - **`tree`**: The [`PathTree`] sum type and the compiler that turns a
//!   collection of paths into a nested lookup structure.
//!
//! Paths describe *what* to remove; the compiled tree is the shape the
//! redaction walker consumes. Compilation happens once per configuration,
//! traversal happens on every log call.

mod field_path;
mod tree;

pub use field_path::{FieldPath, WILDCARD_SEGMENT};
pub use tree::PathTree;
