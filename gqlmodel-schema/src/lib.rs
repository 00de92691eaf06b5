//! # gqlmodel Schema
//!
//! GraphQL schema definitions for model generation.
//!
//! This crate provides:
//! - Type definitions for schema elements (objects, interfaces, unions, enums)
//! - Field type modifier chains (list and non-null wrapping)
//! - Root operation and implementor lookups
//! - Built-in scalar injection

pub mod builtins;
pub mod error;
pub mod types;

pub use builtins::BUILTIN_SCALARS;
pub use error::SchemaError;
pub use types::{
    DefinitionKind, EnumValueDefinition, FieldDefinition, Schema, SchemaType, TypeDefinition,
};
