use jrev_metadata::TypeId;

/// A type-position node: one type reference as it appears in a declaration
/// header.
///
/// `name` is the identifier text as stored in metadata. `qualifier` is the
/// outer-qualification slot: rewrite passes set it instead of splicing text
/// into `name`, so "already qualified" is a structural fact rather than a
/// string-prefix guess. `resolved` is the lazily resolved type reference;
/// passes read it (or resolve `name` through the store when it is `None`)
/// but never overwrite it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleType {
    pub qualifier: Option<String>,
    pub name: String,
    pub resolved: Option<TypeId>,
}

impl SimpleType {
    pub fn new(name: &str) -> Self {
        Self {
            qualifier: None,
            name: name.to_string(),
            resolved: None,
        }
    }

    pub fn resolved(name: &str, id: TypeId) -> Self {
        Self {
            qualifier: None,
            name: name.to_string(),
            resolved: Some(id),
        }
    }

    /// Rendered identifier: `Qualifier.Name` once qualified, bare `Name`
    /// otherwise.
    pub fn identifier_text(&self) -> String {
        match &self.qualifier {
            Some(qualifier) => format!("{qualifier}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// One declared type parameter, e.g. `T extends Comparable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameterDeclaration {
    pub name: String,
    pub extends_bound: Option<SimpleType>,
}

impl TypeParameterDeclaration {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extends_bound: None,
        }
    }

    pub fn bounded(name: &str, extends_bound: SimpleType) -> Self {
        Self {
            name: name.to_string(),
            extends_bound: Some(extends_bound),
        }
    }
}

/// A non-type member. Its type node sits in a body position, not a header
/// position, so the walker never visits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub field_type: SimpleType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDeclaration {
    Type(TypeDeclaration),
    Field(FieldDeclaration),
}

/// One type declaration: header (base type, interfaces, type-parameter
/// bounds) plus members, some of which are nested declarations.
///
/// The tree is finite and acyclic even when the *types* it refers to are
/// mutually recursive; traversals are bounded by the tree, not by the type
/// reference graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    /// Canonical reference to the type this node declares; passes compare
    /// it against visited references' declaring types.
    pub declared_type: TypeId,
    pub base_type: Option<SimpleType>,
    pub interfaces: Vec<SimpleType>,
    pub type_parameters: Vec<TypeParameterDeclaration>,
    pub members: Vec<MemberDeclaration>,
}

impl TypeDeclaration {
    pub fn new(name: &str, declared_type: TypeId) -> Self {
        Self {
            name: name.to_string(),
            declared_type,
            base_type: None,
            interfaces: Vec::new(),
            type_parameters: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// A forest of top-level type declarations, as produced from one source
/// file's worth of classfiles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilationUnit {
    pub types: Vec<TypeDeclaration>,
}

impl CompilationUnit {
    pub fn new(types: Vec<TypeDeclaration>) -> Self {
        Self { types }
    }
}
