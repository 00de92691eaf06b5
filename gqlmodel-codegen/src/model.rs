//! Model descriptors produced by a generation run.

use std::fmt;

/// A concrete type identity: a module path plus a local name.
///
/// An empty package denotes a type in scope everywhere (`bool`, `i32`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdentity {
    /// Module path, e.g. `crate::model`.
    pub package: String,
    /// Local type name.
    pub name: String,
}

impl TypeIdentity {
    /// Creates a new type identity.
    #[must_use]
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified path.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.package, self.name)
        }
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}

/// Where a field's base type comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeOrigin {
    /// Declared by hand outside the generated model.
    External(TypeIdentity),
    /// Generated into the target model package.
    Generated(TypeIdentity),
}

impl TypeOrigin {
    /// Returns the underlying identity.
    #[must_use]
    pub fn identity(&self) -> &TypeIdentity {
        match self {
            Self::External(id) | Self::Generated(id) => id,
        }
    }
}

/// A resolved field type: a base type wrapped in modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// The base type held by value.
    Base(TypeOrigin),
    /// Shared indirection, used for interface and union values.
    Shared(Box<TargetType>),
    /// A value that may be absent.
    Optional(Box<TargetType>),
    /// A sequence of values.
    List(Box<TargetType>),
}

impl TargetType {
    /// Returns the innermost base type.
    #[must_use]
    pub fn base(&self) -> &TypeOrigin {
        match self {
            Self::Base(origin) => origin,
            Self::Shared(inner) | Self::Optional(inner) | Self::List(inner) => inner.base(),
        }
    }

    /// Returns true if any level uses shared indirection.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        match self {
            Self::Base(_) => false,
            Self::Shared(_) => true,
            Self::Optional(inner) | Self::List(inner) => inner.is_shared(),
        }
    }
}

/// Top-level output of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelBundle {
    /// Target module name.
    pub package_name: String,
    /// Interfaces and unions.
    pub interfaces: Vec<Interface>,
    /// Objects and input objects.
    pub models: Vec<Object>,
    /// Enums.
    pub enums: Vec<Enum>,
}

impl ModelBundle {
    /// Returns true when there is nothing worth emitting.
    ///
    /// Interfaces alone never count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }
}

/// A schema interface or union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Rust name.
    pub name: String,
    /// Schema name.
    pub raw: String,
    /// Description.
    pub description: Option<String>,
}

/// A schema object or input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    /// Rust name.
    pub name: String,
    /// Schema name.
    pub raw: String,
    /// Description.
    pub description: Option<String>,
    /// Fields in schema order.
    pub fields: Vec<Field>,
    /// Names of the interfaces this object belongs to.
    pub implements: Vec<String>,
}

/// A field of a generated object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Rust field name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Resolved type.
    pub ty: TargetType,
    /// Serialization attribute naming the schema field.
    pub tag: String,
}

/// A schema enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    /// Rust name.
    pub name: String,
    /// Schema name.
    pub raw: String,
    /// Description.
    pub description: Option<String>,
    /// Values in schema order.
    pub values: Vec<EnumValue>,
}

/// A single enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Rust variant name.
    pub name: String,
    /// Wire literal.
    pub value: String,
    /// Description.
    pub description: Option<String>,
}

/// Builds the serde attribute that pins a field to its schema name.
#[must_use]
pub fn serde_tag(raw: &str) -> String {
    format!("#[serde(rename = \"{}\")]", raw.escape_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified() {
        assert_eq!(
            TypeIdentity::new("crate::model", "User").qualified(),
            "crate::model::User"
        );
        assert_eq!(TypeIdentity::new("", "bool").qualified(), "bool");
        assert_eq!(TypeIdentity::new("std::string", "String").to_string(), "std::string::String");
    }

    #[test]
    fn test_target_type_helpers() {
        let origin = TypeOrigin::Generated(TypeIdentity::new("crate::model", "Node"));
        let ty = TargetType::Optional(Box::new(TargetType::List(Box::new(TargetType::Shared(
            Box::new(TargetType::Base(origin.clone())),
        )))));
        assert!(ty.is_shared());
        assert_eq!(ty.base(), &origin);
        assert!(!TargetType::Base(origin).is_shared());
    }

    #[test]
    fn test_serde_tag() {
        assert_eq!(serde_tag("createdAt"), "#[serde(rename = \"createdAt\")]");
    }

    #[test]
    fn test_bundle_is_empty_ignores_interfaces() {
        let bundle = ModelBundle {
            package_name: "model".to_string(),
            interfaces: vec![Interface {
                name: "Node".to_string(),
                raw: "Node".to_string(),
                description: None,
            }],
            ..ModelBundle::default()
        };
        assert!(bundle.is_empty());
    }
}
