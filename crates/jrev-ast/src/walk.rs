//! Pre-order traversal over the header type positions of a declaration
//! tree.
//!
//! Order per declaration: base type, implemented interfaces in declaration
//! order, type-parameter extends-bounds in declaration order, then each
//! nested member type declaration recursively. The visitor receives the
//! declared [`TypeId`] of the innermost enclosing declaration; the context
//! is an explicit parameter rather than visitor state so a traversal has no
//! order-dependent mutable bookkeeping.
//!
//! The walker itself mutates nothing and visits each tree node exactly
//! once; it decides where to look, visitors decide what to do there.

use jrev_metadata::TypeId;

use crate::ast::{CompilationUnit, MemberDeclaration, SimpleType, TypeDeclaration};

/// Visits every header type position reachable from `decl`. The visitor
/// may rewrite the node; returning `Err` stops the traversal immediately.
pub fn walk_type_positions<E, F>(decl: &mut TypeDeclaration, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut SimpleType, TypeId) -> Result<(), E>,
{
    let enclosing = decl.declared_type;

    if let Some(base) = decl.base_type.as_mut() {
        visit(base, enclosing)?;
    }
    for interface in &mut decl.interfaces {
        visit(interface, enclosing)?;
    }
    for type_parameter in &mut decl.type_parameters {
        if let Some(bound) = type_parameter.extends_bound.as_mut() {
            visit(bound, enclosing)?;
        }
    }
    for member in &mut decl.members {
        if let MemberDeclaration::Type(nested) = member {
            walk_type_positions(nested, visit)?;
        }
    }
    Ok(())
}

/// [`walk_type_positions`] over every top-level declaration of a unit, in
/// order.
pub fn walk_compilation_unit<E, F>(unit: &mut CompilationUnit, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut SimpleType, TypeId) -> Result<(), E>,
{
    for decl in &mut unit.types {
        walk_type_positions(decl, visit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{FieldDeclaration, TypeParameterDeclaration};
    use jrev_metadata::TypeStore;
    use pretty_assertions::assert_eq;

    fn collect(unit: &mut CompilationUnit) -> Vec<(String, TypeId)> {
        let mut seen = Vec::new();
        walk_compilation_unit::<(), _>(unit, &mut |node, enclosing| {
            seen.push((node.identifier_text(), enclosing));
            Ok(())
        })
        .unwrap();
        seen
    }

    #[test]
    fn visits_header_positions_in_declaration_order() {
        let mut store = TypeStore::new();
        let sample = store.intern_class("Sample", "Sample");
        let nested = store.intern_nested_class("Nested", "Sample$Nested", sample);

        let mut decl = TypeDeclaration::new("Sample", sample);
        decl.base_type = Some(SimpleType::new("Base"));
        decl.interfaces = vec![SimpleType::new("A"), SimpleType::new("B")];
        decl.type_parameters = vec![
            TypeParameterDeclaration::bounded("T", SimpleType::new("Comparable")),
            TypeParameterDeclaration::new("U"),
        ];

        let mut inner = TypeDeclaration::new("Nested", nested);
        inner.base_type = Some(SimpleType::new("InnerBase"));
        decl.members.push(MemberDeclaration::Type(inner));

        let mut unit = CompilationUnit::new(vec![decl]);
        assert_eq!(
            collect(&mut unit),
            vec![
                ("Base".to_string(), sample),
                ("A".to_string(), sample),
                ("B".to_string(), sample),
                ("Comparable".to_string(), sample),
                ("InnerBase".to_string(), nested),
            ]
        );
    }

    #[test]
    fn field_types_are_not_header_positions() {
        let mut store = TypeStore::new();
        let sample = store.intern_class("Sample", "Sample");

        let mut decl = TypeDeclaration::new("Sample", sample);
        decl.members.push(MemberDeclaration::Field(FieldDeclaration {
            name: "value".to_string(),
            field_type: SimpleType::new("String"),
        }));

        let mut unit = CompilationUnit::new(vec![decl]);
        assert_eq!(collect(&mut unit), Vec::new());
    }

    #[test]
    fn error_stops_the_traversal() {
        let mut store = TypeStore::new();
        let sample = store.intern_class("Sample", "Sample");

        let mut decl = TypeDeclaration::new("Sample", sample);
        decl.base_type = Some(SimpleType::new("Base"));
        decl.interfaces = vec![SimpleType::new("A")];

        let mut unit = CompilationUnit::new(vec![decl]);
        let mut visited = 0usize;
        let result = walk_compilation_unit(&mut unit, &mut |_, _| {
            visited += 1;
            Err("stop")
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(visited, 1);
    }
}
