use std::any::Any;
use std::fmt;

use crate::descriptor::{DescribeStyle, JavaType};
use crate::error::{InstantiationError, MetadataError, Result};
use crate::types::{TypeId, TypeStore};

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;

/// A declared formal parameter. `position` is the zero-based index in the
/// declaration; parameter order is significant for descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub position: usize,
    pub name: Option<String>,
    pub param_type: JavaType,
}

impl ParameterInfo {
    pub fn new(position: usize, name: Option<&str>, param_type: JavaType) -> Self {
        Self {
            position,
            name: name.map(str::to_string),
            param_type,
        }
    }
}

/// Native-instantiation capability: "construct an object of the declaring
/// type from these arguments". Bound per constructor by the hosting
/// environment; most constructors have none.
pub trait Instantiator {
    fn instantiate(
        &self,
        args: &[Box<dyn Any>],
    ) -> std::result::Result<Box<dyn Any>, InstantiationError>;
}

impl<F> Instantiator for F
where
    F: Fn(&[Box<dyn Any>]) -> std::result::Result<Box<dyn Any>, InstantiationError>,
{
    fn instantiate(
        &self,
        args: &[Box<dyn Any>],
    ) -> std::result::Result<Box<dyn Any>, InstantiationError> {
        self(args)
    }
}

/// Metadata for one compiled constructor.
///
/// Built once when the declaring type's metadata is materialized from the
/// classfile, immutable afterwards. Descriptor and signature strings are
/// pure functions of the parameter and thrown-type lists.
pub struct ConstructorInfo {
    declaring: TypeId,
    access_flags: u16,
    parameters: Vec<ParameterInfo>,
    thrown_types: Vec<TypeId>,
    instantiator: Option<Box<dyn Instantiator>>,
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("declaring", &self.declaring)
            .field("access_flags", &self.access_flags)
            .field("parameters", &self.parameters)
            .field("thrown_types", &self.thrown_types)
            .field("instantiator", &self.instantiator.is_some())
            .finish()
    }
}

impl ConstructorInfo {
    pub fn new(
        declaring: TypeId,
        access_flags: u16,
        parameters: Vec<ParameterInfo>,
        thrown_types: Vec<TypeId>,
    ) -> Self {
        Self {
            declaring,
            access_flags,
            parameters,
            thrown_types,
            instantiator: None,
        }
    }

    pub fn bind_instantiator(mut self, instantiator: Box<dyn Instantiator>) -> Self {
        self.instantiator = Some(instantiator);
        self
    }

    /// Constructors all share the JVM internal name.
    pub fn name(&self) -> &'static str {
        "<init>"
    }

    pub fn declaring_type(&self) -> TypeId {
        self.declaring
    }

    pub fn access_flags(&self) -> u16 {
        self.access_flags
    }

    pub fn is_public(&self) -> bool {
        self.access_flags & ACC_PUBLIC != 0
    }

    pub fn is_private(&self) -> bool {
        self.access_flags & ACC_PRIVATE != 0
    }

    pub fn is_protected(&self) -> bool {
        self.access_flags & ACC_PROTECTED != 0
    }

    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    pub fn thrown_types(&self) -> &[TypeId] {
        &self.thrown_types
    }

    /// Binary-level descriptor built from the erasure of each parameter
    /// type, e.g. `(Ljava/util/List;I)V`. Used wherever binary identity is
    /// matched against a raw method table.
    pub fn erased_descriptor(&self, store: &TypeStore) -> String {
        let mut out = String::from("(");
        for param in &self.parameters {
            param.param_type.append_erased_descriptor(store, &mut out);
        }
        out.push_str(")V");
        out
    }

    /// Generics-preserving signature, e.g.
    /// `(Ljava/util/List<Ljava/lang/String;>;I)V`. Identical to
    /// [`ConstructorInfo::erased_descriptor`] when no parameter involves
    /// generics.
    pub fn generic_signature(&self, store: &TypeStore) -> String {
        let mut out = String::from("(");
        for param in &self.parameters {
            param.param_type.append_generic_signature(store, &mut out);
        }
        out.push_str(")V");
        out
    }

    /// Source-level description:
    /// `void <init>(<params>)[ throws <types>]`, throws clause omitted when
    /// nothing is thrown. Thrown types render in declaration order.
    pub fn describe(&self, store: &TypeStore, style: DescribeStyle) -> String {
        let mut out = String::from("void ");
        out.push_str(self.name());
        out.push('(');
        for (i, param) in self.parameters.iter().enumerate() {
            if i != 0 {
                out.push_str(", ");
            }
            param.param_type.append_description(store, style, &mut out);
        }
        out.push(')');

        if !self.thrown_types.is_empty() {
            out.push_str(" throws ");
            for (i, thrown) in self.thrown_types.iter().enumerate() {
                if i != 0 {
                    out.push_str(", ");
                }
                match style {
                    DescribeStyle::Brief => out.push_str(&store.qualified_name(*thrown)),
                    DescribeStyle::Simple => out.push_str(store.simple_name(*thrown)),
                }
            }
        }

        out
    }

    /// Constructs an instance through the bound instantiator.
    ///
    /// Fails with [`MetadataError::UnboundConstructor`] when no capability
    /// is bound, and with [`MetadataError::Invocation`] when the capability
    /// runs but fails, whatever the native failure category was.
    pub fn invoke(&self, store: &TypeStore, args: &[Box<dyn Any>]) -> Result<Box<dyn Any>> {
        let instantiator =
            self.instantiator
                .as_deref()
                .ok_or_else(|| MetadataError::UnboundConstructor {
                    declaring: store.qualified_name(self.declaring),
                })?;
        instantiator.instantiate(args).map_err(MetadataError::from)
    }
}
