use crate::types::{TypeId, TypeStore};

/// The eight JVM primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl PrimitiveType {
    fn descriptor(self) -> char {
        match self {
            PrimitiveType::Byte => 'B',
            PrimitiveType::Char => 'C',
            PrimitiveType::Double => 'D',
            PrimitiveType::Float => 'F',
            PrimitiveType::Int => 'I',
            PrimitiveType::Long => 'J',
            PrimitiveType::Short => 'S',
            PrimitiveType::Boolean => 'Z',
        }
    }

    fn source_name(self) -> &'static str {
        match self {
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Double => "double",
            PrimitiveType::Float => "float",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Short => "short",
            PrimitiveType::Boolean => "boolean",
        }
    }
}

/// How a type renders its own name in description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeStyle {
    /// Dotted qualified names, e.g. `java.util.List<java.lang.String>`.
    Brief,
    /// Simple names only, e.g. `List<String>`.
    Simple,
}

/// The declared type of a parameter: a closed set of JVM type shapes.
///
/// `Reference` keeps the declared type arguments so that signature rendering
/// can retain them while descriptor rendering erases them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaType {
    Primitive(PrimitiveType),
    Reference {
        class: TypeId,
        type_args: Vec<JavaType>,
    },
    /// A type variable id minted by [`TypeStore::intern_type_variable`].
    Variable(TypeId),
    Array(Box<JavaType>),
}

impl JavaType {
    pub fn reference(class: TypeId) -> Self {
        JavaType::Reference {
            class,
            type_args: Vec::new(),
        }
    }

    pub fn generic(class: TypeId, type_args: Vec<JavaType>) -> Self {
        JavaType::Reference { class, type_args }
    }

    /// Whether this shape carries any generic information (type arguments
    /// or type variables, at any depth). When false, the generic signature
    /// is textually identical to the erased descriptor.
    pub fn has_generic_info(&self) -> bool {
        match self {
            JavaType::Primitive(_) => false,
            JavaType::Reference { type_args, .. } => !type_args.is_empty(),
            JavaType::Variable(_) => true,
            JavaType::Array(component) => component.has_generic_info(),
        }
    }

    /// Appends the JVM field descriptor of this type's erasure: type
    /// arguments are stripped and type variables erase to
    /// `java.lang.Object`.
    pub fn append_erased_descriptor(&self, store: &TypeStore, out: &mut String) {
        match self {
            JavaType::Primitive(p) => out.push(p.descriptor()),
            JavaType::Reference { class, .. } => {
                out.push('L');
                out.push_str(store.binary_name(*class));
                out.push(';');
            }
            JavaType::Variable(_) => out.push_str("Ljava/lang/Object;"),
            JavaType::Array(component) => {
                out.push('[');
                component.append_erased_descriptor(store, out);
            }
        }
    }

    /// Appends the generics-preserving JVM signature of this type.
    pub fn append_generic_signature(&self, store: &TypeStore, out: &mut String) {
        match self {
            JavaType::Primitive(p) => out.push(p.descriptor()),
            JavaType::Reference { class, type_args } => {
                out.push('L');
                out.push_str(store.binary_name(*class));
                if !type_args.is_empty() {
                    out.push('<');
                    for arg in type_args {
                        arg.append_generic_signature(store, out);
                    }
                    out.push('>');
                }
                out.push(';');
            }
            JavaType::Variable(id) => {
                assert!(
                    store.is_type_variable(*id),
                    "JavaType::Variable holds a non-variable id"
                );
                out.push('T');
                out.push_str(store.simple_name(*id));
                out.push(';');
            }
            JavaType::Array(component) => {
                out.push('[');
                component.append_generic_signature(store, out);
            }
        }
    }

    /// Appends source-level description text.
    pub fn append_description(&self, store: &TypeStore, style: DescribeStyle, out: &mut String) {
        match self {
            JavaType::Primitive(p) => out.push_str(p.source_name()),
            JavaType::Reference { class, type_args } => {
                match style {
                    DescribeStyle::Brief => out.push_str(&store.qualified_name(*class)),
                    DescribeStyle::Simple => out.push_str(store.simple_name(*class)),
                }
                if !type_args.is_empty() {
                    out.push('<');
                    for (i, arg) in type_args.iter().enumerate() {
                        if i != 0 {
                            out.push_str(", ");
                        }
                        arg.append_description(store, style, out);
                    }
                    out.push('>');
                }
            }
            JavaType::Variable(id) => out.push_str(store.simple_name(*id)),
            JavaType::Array(component) => {
                component.append_description(store, style, out);
                out.push_str("[]");
            }
        }
    }
}
