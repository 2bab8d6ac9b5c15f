//! Declaration-tree model for decompiled type declarations.
//!
//! The upstream AST-construction stage builds a [`CompilationUnit`] (a
//! forest of [`TypeDeclaration`]s) from classfile metadata; transform
//! passes then mutate it in place before it is handed to the
//! pretty-printer. This crate owns the tree shapes and the header-position
//! walker the passes share; it contains no rewrite policy itself.

mod ast;
pub mod walk;

pub use ast::{
    CompilationUnit, FieldDeclaration, MemberDeclaration, SimpleType, TypeDeclaration,
    TypeParameterDeclaration,
};
