//! Error types for schema construction.

use thiserror::Error;

/// Error type for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Type not found.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Type name.
        name: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, field, enum value).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Malformed type reference in GraphQL notation.
    #[error("invalid type reference '{input}': {reason}")]
    InvalidTypeRef {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl SchemaError {
    /// Creates a type not found error.
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid type reference error.
    pub fn invalid_type_ref(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeRef {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
