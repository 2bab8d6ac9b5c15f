//! AST fix-up passes that run between tree construction and rendering.
//!
//! Currently one pass: nested-reference qualification. Each pass owns the
//! compilation unit exclusively for its duration and reads the type store
//! through a shared reference; callers serialize passes over one unit.

mod qualify;

pub use qualify::{qualify_nested_references, TransformError};
