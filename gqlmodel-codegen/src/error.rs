//! Error types for model resolution and code generation.

use thiserror::Error;

/// Error returned by a [`Binder`](crate::binder::Binder) lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// No type is declared at the given location.
    #[error("type '{name}' not found in package '{package}'")]
    NotFound {
        /// Module path searched.
        package: String,
        /// Local type name.
        name: String,
    },
}

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema error.
    #[error("schema error: {0}")]
    Schema(#[from] gqlmodel_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid config: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// A user-defined model points at a type that does not exist.
    #[error("model for schema type '{schema_type}' is bound to '{location}': {source}")]
    ExternalTypeNotFound {
        /// Schema type carrying the override.
        schema_type: String,
        /// Configured qualified location.
        location: String,
        /// Underlying lookup failure.
        source: BindError,
    },

    /// Unknown type reference.
    #[error("unknown type '{type_name}' in field '{field}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// Two schema names map to the same generated identifier.
    #[error("{kind} '{first}' and '{second}' both generate '{name}'")]
    NameCollision {
        /// What collided (type, field, enum value).
        kind: String,
        /// The generated identifier.
        name: String,
        /// First schema name.
        first: String,
        /// Second schema name.
        second: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a name collision error.
    pub fn collision(
        kind: impl Into<String>,
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::NameCollision {
            kind: kind.into(),
            name: name.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}
