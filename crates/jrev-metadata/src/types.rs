use std::collections::HashMap;
use std::fmt;

use crate::error::{MetadataError, Result};

/// Canonical handle to one compiled type or type variable.
///
/// Two `TypeId`s are equal iff they denote the same compiled entity; the
/// qualification pass relies on this to test declaring-type relationships,
/// so ids must come from a single [`TypeStore`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TypeRecord {
    Class {
        simple_name: String,
        binary_name: String,
        declaring: Option<TypeId>,
    },
    TypeVariable {
        name: String,
    },
}

/// Interning table for [`TypeId`]s.
///
/// The classfile loader interns every type it materializes; after that the
/// store is published behind `&TypeStore` and only queried. Classes are
/// deduplicated by binary name. Type variables are *not* deduplicated: a
/// variable is an entity of one generic declaration, so `T` of `Outer` and
/// `T` of `Inner` must stay distinct ids even though they share a name.
#[derive(Debug, Default)]
pub struct TypeStore {
    records: Vec<TypeRecord>,
    by_binary_name: HashMap<String, TypeId>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a top-level class. `binary_name` uses the classfile form,
    /// e.g. `com/example/Outer`.
    pub fn intern_class(&mut self, simple_name: &str, binary_name: &str) -> TypeId {
        if let Some(&id) = self.by_binary_name.get(binary_name) {
            return id;
        }
        self.push_class(simple_name, binary_name, None)
    }

    /// Interns a nested class, e.g. binary name `com/example/Outer$Inner`
    /// declared by the id previously interned for `com/example/Outer`.
    pub fn intern_nested_class(
        &mut self,
        simple_name: &str,
        binary_name: &str,
        declaring: TypeId,
    ) -> TypeId {
        if let Some(&id) = self.by_binary_name.get(binary_name) {
            return id;
        }
        self.push_class(simple_name, binary_name, Some(declaring))
    }

    /// Mints a fresh type variable. Never deduplicated (see type-level docs).
    pub fn intern_type_variable(&mut self, name: &str) -> TypeId {
        let id = TypeId::from_raw(self.records.len() as u32);
        self.records.push(TypeRecord::TypeVariable {
            name: name.to_string(),
        });
        id
    }

    fn push_class(
        &mut self,
        simple_name: &str,
        binary_name: &str,
        declaring: Option<TypeId>,
    ) -> TypeId {
        let id = TypeId::from_raw(self.records.len() as u32);
        self.records.push(TypeRecord::Class {
            simple_name: simple_name.to_string(),
            binary_name: binary_name.to_string(),
            declaring,
        });
        self.by_binary_name.insert(binary_name.to_string(), id);
        id
    }

    fn record(&self, id: TypeId) -> &TypeRecord {
        &self.records[id.idx()]
    }

    /// Unqualified name as stored in metadata (`Inner`, or `T` for a
    /// type variable).
    pub fn simple_name(&self, id: TypeId) -> &str {
        match self.record(id) {
            TypeRecord::Class { simple_name, .. } => simple_name,
            TypeRecord::TypeVariable { name } => name,
        }
    }

    /// Classfile binary name (`com/example/Outer$Inner`). Panics for type
    /// variables, which have no binary name.
    pub fn binary_name(&self, id: TypeId) -> &str {
        match self.record(id) {
            TypeRecord::Class { binary_name, .. } => binary_name,
            TypeRecord::TypeVariable { name } => {
                panic!("type variable `{name}` has no binary name")
            }
        }
    }

    /// Dotted source-level name: `com.example.Outer.Inner` for nested
    /// classes, the bare name for type variables.
    pub fn qualified_name(&self, id: TypeId) -> String {
        match self.record(id) {
            TypeRecord::Class {
                simple_name,
                binary_name,
                declaring,
            } => match declaring {
                Some(outer) => format!("{}.{}", self.qualified_name(*outer), simple_name),
                None => binary_name.replace('/', "."),
            },
            TypeRecord::TypeVariable { name } => name.clone(),
        }
    }

    pub fn is_nested(&self, id: TypeId) -> bool {
        matches!(
            self.record(id),
            TypeRecord::Class {
                declaring: Some(_),
                ..
            }
        )
    }

    pub fn is_type_variable(&self, id: TypeId) -> bool {
        matches!(self.record(id), TypeRecord::TypeVariable { .. })
    }

    /// Declaring type of a nested class.
    ///
    /// Panics when `id` is not nested; that is a caller bug, not a data
    /// condition. Use [`TypeStore::try_declaring_type`] when nesting has
    /// not been checked yet.
    pub fn declaring_type(&self, id: TypeId) -> TypeId {
        match self.try_declaring_type(id) {
            Some(outer) => outer,
            None => panic!(
                "declaring_type on non-nested type `{}`",
                self.simple_name(id)
            ),
        }
    }

    pub fn try_declaring_type(&self, id: TypeId) -> Option<TypeId> {
        match self.record(id) {
            TypeRecord::Class { declaring, .. } => *declaring,
            TypeRecord::TypeVariable { .. } => None,
        }
    }

    /// Resolves a source identifier to its canonical id.
    ///
    /// Accepts binary names, dotted qualified names and simple names, in
    /// that precedence order. Type variables are never resolvable by name;
    /// the loader pre-resolves the nodes that refer to them, because a bare
    /// name cannot identify which declaration's variable is meant.
    pub fn resolve(&self, name: &str) -> Result<TypeId> {
        if let Some(&id) = self.by_binary_name.get(name) {
            return Ok(id);
        }
        for (idx, record) in self.records.iter().enumerate() {
            let id = TypeId::from_raw(idx as u32);
            if let TypeRecord::Class { simple_name, .. } = record {
                if simple_name == name || self.qualified_name(id) == name {
                    return Ok(id);
                }
            }
        }
        Err(MetadataError::UnresolvedType {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_store() -> (TypeStore, TypeId, TypeId) {
        let mut store = TypeStore::new();
        let outer = store.intern_class("Outer", "com/example/Outer");
        let inner = store.intern_nested_class("Inner", "com/example/Outer$Inner", outer);
        (store, outer, inner)
    }

    #[test]
    fn interning_is_keyed_by_binary_name() {
        let (mut store, outer, inner) = sample_store();
        assert_eq!(store.intern_class("Outer", "com/example/Outer"), outer);
        assert_eq!(
            store.intern_nested_class("Inner", "com/example/Outer$Inner", outer),
            inner
        );
    }

    #[test]
    fn type_variables_are_never_deduplicated() {
        let mut store = TypeStore::new();
        let a = store.intern_type_variable("T");
        let b = store.intern_type_variable("T");
        assert_ne!(a, b);
        assert!(store.is_type_variable(a));
        assert!(!store.is_nested(a));
        assert_eq!(store.try_declaring_type(a), None);
    }

    #[test]
    fn nesting_queries() {
        let (store, outer, inner) = sample_store();
        assert!(store.is_nested(inner));
        assert!(!store.is_nested(outer));
        assert_eq!(store.declaring_type(inner), outer);
        assert_eq!(store.simple_name(inner), "Inner");
        assert_eq!(store.qualified_name(inner), "com.example.Outer.Inner");
    }

    #[test]
    #[should_panic(expected = "declaring_type on non-nested")]
    fn declaring_type_of_top_level_class_panics() {
        let (store, outer, _) = sample_store();
        store.declaring_type(outer);
    }

    #[test]
    fn resolve_accepts_binary_dotted_and_simple_names() {
        let (store, outer, inner) = sample_store();
        assert_eq!(store.resolve("com/example/Outer$Inner").unwrap(), inner);
        assert_eq!(store.resolve("com.example.Outer.Inner").unwrap(), inner);
        assert_eq!(store.resolve("Inner").unwrap(), inner);
        assert_eq!(store.resolve("Outer").unwrap(), outer);
    }

    #[test]
    fn resolve_unknown_name_fails() {
        let (store, _, _) = sample_store();
        let err = store.resolve("Missing").unwrap_err();
        assert!(matches!(err, MetadataError::UnresolvedType { name } if name == "Missing"));
    }

    #[test]
    fn type_variables_are_not_resolvable_by_name() {
        let mut store = TypeStore::new();
        store.intern_type_variable("T");
        assert!(store.resolve("T").is_err());
    }
}
