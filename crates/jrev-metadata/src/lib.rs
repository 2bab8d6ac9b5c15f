//! Reflection-style metadata for compiled Java types.
//!
//! This crate is the read side of the decompiler's type model: interned,
//! identity-stable references to compiled types and type variables
//! ([`TypeStore`] / [`TypeId`]), the declared shapes of member signatures
//! ([`JavaType`]), and constructor metadata ([`ConstructorInfo`]) with
//! descriptor, signature and description rendering.
//!
//! The store is populated once by the upstream classfile loader and is
//! read-only from then on; every later stage (AST fix-ups, rendering,
//! overload matching) queries it through shared references.

mod descriptor;
mod error;
mod member;
mod types;

pub use descriptor::{DescribeStyle, JavaType, PrimitiveType};
pub use error::{InstantiationError, MetadataError, Result};
pub use member::{ConstructorInfo, Instantiator, ParameterInfo};
pub use member::{ACC_FINAL, ACC_PRIVATE, ACC_PROTECTED, ACC_PUBLIC, ACC_STATIC};
pub use types::{TypeId, TypeStore};
