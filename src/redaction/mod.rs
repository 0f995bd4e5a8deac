//! Redaction traversal over decoded payloads.
//!
//! This module provides:
//!
//! - **`shape`**: The [`ValueShape`] classification (keyed object, sequence,
//!   opaque) that decides recursion at every node.
//! - **`walker`**: The recursive [`omit`] walker that deletes tree-matched
//!   fields from a disposable clone.
//!
//! It is responsible for:
//! - Deleting exactly the fields named by a compiled [`crate::PathTree`],
//!   nothing else.
//! - Treating absent keys and mismatched shapes as no-ops, never as errors.
//!
//! It does not clone values, serialize anything, or decide *what* should be
//! redacted; callers hand it a value they already know is disposable.

mod shape;
mod walker;

pub use shape::ValueShape;
pub use walker::omit;
