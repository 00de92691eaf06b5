//! # gqlmodel Codegen
//!
//! Model resolution and code generation from GraphQL schemas.
//!
//! This crate provides:
//! - Resolution of schema types to generated or user-defined Rust types
//! - List/nullable modifier propagation
//! - Deterministic model descriptors and their registration
//! - Rust source rendering of the resulting models

pub mod binder;
pub mod config;
pub mod error;
pub mod model;
pub mod modifiers;
pub mod naming;
pub mod plugin;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod rust;
pub mod walker;

pub use binder::{Binder, StaticBinder};
pub use config::{Config, PackageConfig, TypeMap};
pub use error::{BindError, CodegenError};
pub use model::ModelBundle;
pub use plugin::{ConfigMutator, Generation, ModelGen, Plugin};
pub use render::{RenderOptions, Renderer};
pub use rust::RustRenderer;
pub use walker::SchemaWalker;

use gqlmodel_schema::Schema;

/// Generates the model file for a schema and registers the generated types.
///
/// # Arguments
/// * `schema` - Validated schema; built-in scalars are injected
/// * `config` - Configuration; receives the generated registrations
/// * `binder` - Lookup for user-defined types
///
/// # Returns
/// The sorted descriptors and whether a file was written.
///
/// # Errors
/// Returns `CodegenError` if resolution or writing fails.
pub fn generate_models(
    schema: &mut Schema,
    config: &mut Config,
    binder: &dyn Binder,
) -> Result<Generation, CodegenError> {
    ModelGen::new().mutate_config(config, schema, binder)
}

/// Resolves a schema to Rust source without touching the file system.
///
/// The configuration is not modified.
///
/// # Errors
/// Returns `CodegenError` if resolution fails.
pub fn generate_source(
    schema: &Schema,
    config: &Config,
    binder: &dyn Binder,
) -> Result<String, CodegenError> {
    config.check()?;
    let mut bundle = SchemaWalker::new(schema, config, binder).walk()?;
    registry::sort_bundle(&mut bundle);
    Ok(rust::generate(&bundle, config.model.import_path(), true))
}
