//! Resolution of schema type names to Rust type identities.
//!
//! Resolution runs in two phases. [`SymbolTable::synthesize`] assigns every
//! generated schema type its identity up front, purely from its name. The
//! [`TypeResolver`] then answers field lookups from that table, or from the
//! [`Binder`] for user-defined types, so fields may reference types the walk
//! has not reached yet.

use crate::binder::{Binder, split_qualified};
use crate::config::Config;
use crate::error::CodegenError;
use crate::model::{TypeIdentity, TypeOrigin};
use crate::naming::to_type_name;
use gqlmodel_schema::Schema;
use std::collections::HashMap;

/// Identities of every type generated into the model package.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, TypeIdentity>,
}

impl SymbolTable {
    /// Assigns an identity to every schema type that is not user-defined.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if two schema names produce the
    /// same Rust name.
    pub fn synthesize(schema: &Schema, config: &Config) -> Result<Self, CodegenError> {
        let package = config.model.import_path();
        let mut symbols = HashMap::with_capacity(schema.types.len());
        let mut owners: HashMap<String, &str> = HashMap::with_capacity(schema.types.len());

        for def in &schema.types {
            if config.models.user_defined(&def.name) {
                continue;
            }

            let name = to_type_name(&def.name);
            if let Some(first) = owners.insert(name.clone(), &def.name) {
                return Err(CodegenError::collision("type", name, first, &def.name));
            }
            symbols.insert(def.name.clone(), TypeIdentity::new(package, name));
        }

        Ok(Self { symbols })
    }

    /// Returns the generated identity of a schema type.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeIdentity> {
        self.symbols.get(name)
    }

    /// Returns the number of generated identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing is generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Resolves the base type of a field.
pub struct TypeResolver<'a> {
    config: &'a Config,
    binder: &'a dyn Binder,
    symbols: &'a SymbolTable,
}

impl<'a> TypeResolver<'a> {
    /// Creates a new type resolver.
    #[must_use]
    pub fn new(config: &'a Config, binder: &'a dyn Binder, symbols: &'a SymbolTable) -> Self {
        Self {
            config,
            binder,
            symbols,
        }
    }

    /// Resolves `type_name`, referenced by `field`, to its origin.
    ///
    /// # Errors
    /// Returns `CodegenError::ExternalTypeNotFound` if a user-defined model
    /// does not exist, or `CodegenError::UnknownType` if the name is neither
    /// user-defined nor a schema type.
    pub fn resolve(&self, type_name: &str, field: &str) -> Result<TypeOrigin, CodegenError> {
        if let Some(location) = self.config.models.model(type_name) {
            let (package, name) = split_qualified(location);
            let identity = self.binder.find_type(package, name).map_err(|source| {
                CodegenError::ExternalTypeNotFound {
                    schema_type: type_name.to_string(),
                    location: location.to_string(),
                    source,
                }
            })?;
            return Ok(TypeOrigin::External(identity));
        }

        self.symbols
            .get(type_name)
            .cloned()
            .map(TypeOrigin::Generated)
            .ok_or_else(|| CodegenError::UnknownType {
                type_name: type_name.to_string(),
                field: field.to_string(),
            })
    }
}
