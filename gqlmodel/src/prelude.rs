//! Prelude module for convenient imports.
//!
//! ```ignore
//! use gqlmodel::prelude::*;
//! ```

// Schema types
pub use gqlmodel_schema::{
    DefinitionKind, EnumValueDefinition, FieldDefinition, Schema, SchemaError, SchemaType,
    TypeDefinition,
};

// Codegen types
pub use gqlmodel_codegen::model::{
    Enum, EnumValue, Field, Interface, ModelBundle, Object, TargetType, TypeIdentity, TypeOrigin,
};
pub use gqlmodel_codegen::{
    BindError, Binder, CodegenError, Config, ConfigMutator, Generation, ModelGen, PackageConfig,
    Plugin, RenderOptions, Renderer, RustRenderer, StaticBinder, TypeMap, generate_models,
    generate_source,
};
