//! Outer-qualification of nested-type references in declaration headers.
//!
//! Decompiled headers render a type reference with the simple name stored
//! in metadata, but a top-level declaration (or a sibling member) cannot
//! see another type's nested member by simple name; it needs
//! `Outer.Inner`. This pass walks every header type position and fills the
//! node's qualifier slot with the declaring type's simple name.
//!
//! Runs once after tree construction and before rendering.

use jrev_ast::{walk, CompilationUnit, SimpleType};
use jrev_metadata::{MetadataError, TypeId, TypeStore};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A header position names a type the store has never seen. Upstream
    /// produced a broken tree; the unit is abandoned rather than rewritten
    /// with a guessed name.
    #[error("unresolved type reference `{identifier}`")]
    UnresolvedType { identifier: String },
}

/// Qualifies every nested-type reference in the unit's declaration headers.
///
/// Per node: type variables are never rewritten (detected by variant, not
/// by name); nested types get their declaring type's simple name as
/// qualifier unless one is already set; everything else is untouched.
/// Nested member declarations are processed recursively, each reference
/// judged against its own declaring type. The pass is idempotent: the
/// qualifier slot is written at most once per node, ever.
pub fn qualify_nested_references(
    store: &TypeStore,
    unit: &mut CompilationUnit,
) -> Result<(), TransformError> {
    walk::walk_compilation_unit(unit, &mut |node, enclosing| {
        qualify_node(store, node, enclosing)
    })
}

fn qualify_node(
    store: &TypeStore,
    node: &mut SimpleType,
    enclosing: TypeId,
) -> Result<(), TransformError> {
    let reference = match node.resolved {
        Some(id) => id,
        None => store
            .resolve(&node.name)
            .map_err(|err| match err {
                MetadataError::UnresolvedType { name } => {
                    TransformError::UnresolvedType { identifier: name }
                }
                // resolve only ever reports unresolved names
                other => TransformError::UnresolvedType {
                    identifier: other.to_string(),
                },
            })?,
    };

    if store.is_type_variable(reference) {
        trace!(identifier = %node.name, "skipping type variable");
        return Ok(());
    }

    if !store.is_nested(reference) {
        return Ok(());
    }

    if node.qualifier.is_some() {
        trace!(identifier = %node.identifier_text(), "already qualified");
        return Ok(());
    }

    let outer = store.simple_name(store.declaring_type(reference));
    debug!(
        identifier = %node.name,
        qualifier = %outer,
        enclosing = %store.simple_name(enclosing),
        "qualifying nested type reference"
    );
    node.qualifier = Some(outer.to_string());
    Ok(())
}
