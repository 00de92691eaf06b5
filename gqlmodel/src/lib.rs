//! # gqlmodel
//!
//! Deterministic Rust model generation from GraphQL schemas.
//!
//! Given a validated schema and a configuration naming the types you already
//! wrote by hand, gqlmodel generates structs for objects and input objects,
//! marker traits for interfaces and unions, and enums, then records every
//! generated type in the configuration so later generation stages reference
//! the same identities.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqlmodel::prelude::*;
//!
//! let mut schema = Schema::new()
//!     .with_type(TypeDefinition::object("User")
//!         .field(FieldDefinition::new("name", "String!".parse()?)))?;
//! let mut config = Config::default();
//!
//! let generation = generate_models(&mut schema, &mut config, &StaticBinder::with_builtins())?;
//! assert_eq!(config.models.model("User"), Some("crate::model::User"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema type definitions and modifier chains
//! - [`codegen`] - Type resolution, descriptors, registration and rendering

pub mod prelude;

/// Schema type definitions.
pub mod schema {
    pub use gqlmodel_schema::*;
}

/// Model resolution and code generation.
pub mod codegen {
    pub use gqlmodel_codegen::*;
}

pub use gqlmodel_codegen::{generate_models, generate_source};
