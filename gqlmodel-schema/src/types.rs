//! Schema type definitions.
//!
//! This module contains the data structures representing a validated GraphQL
//! schema: named type definitions, their fields and enum values, and the
//! modifier chain attached to every use of a type.

use crate::error::SchemaError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Complete GraphQL schema definition.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Type definitions in declaration order.
    pub types: Vec<TypeDefinition>,
    /// Explicit query root name (defaults to `Query`).
    pub query: Option<String>,
    /// Explicit mutation root name (defaults to `Mutation`).
    pub mutation: Option<String>,
    /// Explicit subscription root name (defaults to `Subscription`).
    pub subscription: Option<String>,
    /// Type lookup map (built as types are added).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type definition to the schema.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` if a type with the same name
    /// already exists.
    pub fn add_type(&mut self, type_def: TypeDefinition) -> Result<(), SchemaError> {
        if self.type_map.contains_key(&type_def.name) {
            return Err(SchemaError::duplicate("type", &type_def.name));
        }
        self.type_map.insert(type_def.name.clone(), self.types.len());
        self.types.push(type_def);
        Ok(())
    }

    /// Adds a type definition, builder style.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` on a repeated name.
    pub fn with_type(mut self, type_def: TypeDefinition) -> Result<Self, SchemaError> {
        self.add_type(type_def)?;
        Ok(self)
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Returns the kind of the named type.
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if no such type exists.
    pub fn kind_of(&self, name: &str) -> Result<DefinitionKind, SchemaError> {
        self.get_type(name)
            .map(|def| def.kind)
            .ok_or_else(|| SchemaError::type_not_found(name))
    }

    /// Returns the query root type, if any.
    #[must_use]
    pub fn query_type(&self) -> Option<&TypeDefinition> {
        self.get_type(self.query.as_deref().unwrap_or("Query"))
    }

    /// Returns the mutation root type, if any.
    #[must_use]
    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.get_type(self.mutation.as_deref().unwrap_or("Mutation"))
    }

    /// Returns the subscription root type, if any.
    #[must_use]
    pub fn subscription_type(&self) -> Option<&TypeDefinition> {
        self.get_type(self.subscription.as_deref().unwrap_or("Subscription"))
    }

    /// Returns true if `name` is the query, mutation or subscription root.
    #[must_use]
    pub fn is_root_operation(&self, name: &str) -> bool {
        [
            self.query_type(),
            self.mutation_type(),
            self.subscription_type(),
        ]
        .into_iter()
        .flatten()
        .any(|root| root.name == name)
    }

    /// Returns the abstract types (interfaces and unions) the named type
    /// belongs to.
    ///
    /// Interfaces declared on the type come first in declaration order,
    /// followed by every union listing the type as a member.
    #[must_use]
    pub fn get_implements(&self, name: &str) -> Vec<&TypeDefinition> {
        let mut result: Vec<&TypeDefinition> = Vec::new();

        if let Some(def) = self.get_type(name) {
            for iface in &def.interfaces {
                if let Some(found) = self.get_type(iface) {
                    result.push(found);
                }
            }
        }

        for def in &self.types {
            if def.kind == DefinitionKind::Union && def.possible_types.iter().any(|m| m == name) {
                result.push(def);
            }
        }

        result
    }

    /// Rebuilds the type lookup map from the types vector.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for (idx, type_def) in self.types.iter().enumerate() {
            self.type_map.insert(type_def.name.clone(), idx);
        }
    }
}

/// Kind of a named schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// Leaf scalar.
    Scalar,
    /// Output object.
    Object,
    /// Interface.
    Interface,
    /// Union of objects.
    Union,
    /// Enumeration.
    Enum,
    /// Input object.
    InputObject,
}

impl DefinitionKind {
    /// Returns true for interfaces and unions.
    #[must_use]
    pub const fn is_abstract(self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }
}

/// A named type definition.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    /// Type kind.
    pub kind: DefinitionKind,
    /// Type name as written in the schema.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields (objects, input objects, interfaces).
    pub fields: Vec<FieldDefinition>,
    /// Interfaces implemented by an object or interface.
    pub interfaces: Vec<String>,
    /// Union members.
    pub possible_types: Vec<String>,
    /// Enum values.
    pub enum_values: Vec<EnumValueDefinition>,
    /// Whether the type was injected as a built-in.
    pub built_in: bool,
}

impl TypeDefinition {
    /// Creates an empty definition of the given kind.
    #[must_use]
    pub fn new(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
            possible_types: Vec::new(),
            enum_values: Vec::new(),
            built_in: false,
        }
    }

    /// Creates a scalar definition.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Scalar, name)
    }

    /// Creates an object definition.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Object, name)
    }

    /// Creates an input object definition.
    #[must_use]
    pub fn input_object(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::InputObject, name)
    }

    /// Creates an interface definition.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Interface, name)
    }

    /// Creates a union definition.
    #[must_use]
    pub fn union(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Union, name)
    }

    /// Creates an enum definition.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Enum, name)
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Appends a union member.
    #[must_use]
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.possible_types.push(member.into());
        self
    }

    /// Appends an enum value.
    #[must_use]
    pub fn value(mut self, value: EnumValueDefinition) -> Self {
        self.enum_values.push(value);
        self
    }

    /// Marks the definition as built-in.
    #[must_use]
    pub fn built_in(mut self) -> Self {
        self.built_in = true;
        self
    }
}

/// A field of an object, input object or interface.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Field name as written in the schema.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Field type with its modifier chain.
    pub ty: SchemaType,
}

impl FieldDefinition {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single enum value.
#[derive(Debug, Clone)]
pub struct EnumValueDefinition {
    /// Literal as written in the schema.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

impl EnumValueDefinition {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The use of a type together with its list/non-null modifier chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// A named type, e.g. `Int` or `Int!`.
    Named {
        /// Referenced type name.
        name: String,
        /// Whether the value may not be null.
        non_null: bool,
    },
    /// A list, e.g. `[Int]` or `[Int]!`.
    List {
        /// Element type.
        elem: Box<SchemaType>,
        /// Whether the list itself may not be null.
        non_null: bool,
    },
}

impl SchemaType {
    /// Creates a nullable named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            non_null: false,
        }
    }

    /// Creates a nullable list of `elem`.
    #[must_use]
    pub fn list(elem: SchemaType) -> Self {
        Self::List {
            elem: Box::new(elem),
            non_null: false,
        }
    }

    /// Marks this level as non-null.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::Named { name, .. } => Self::Named {
                name,
                non_null: true,
            },
            Self::List { elem, .. } => Self::List {
                elem,
                non_null: true,
            },
        }
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named { name, .. } => name,
            Self::List { elem, .. } => elem.name(),
        }
    }

    /// Returns true if this level is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        match self {
            Self::Named { non_null, .. } | Self::List { non_null, .. } => *non_null,
        }
    }

    /// Returns the element type for lists.
    #[must_use]
    pub fn elem(&self) -> Option<&SchemaType> {
        match self {
            Self::List { elem, .. } => Some(elem),
            Self::Named { .. } => None,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, .. } => write!(f, "{}", name)?,
            Self::List { elem, .. } => write!(f, "[{}]", elem)?,
        }
        if self.is_non_null() {
            write!(f, "!")?;
        }
        Ok(())
    }
}

impl FromStr for SchemaType {
    type Err = SchemaError;

    /// Parses GraphQL type notation such as `[String!]!`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ty, rest) = parse_type(s.trim(), s)?;
        if !rest.trim().is_empty() {
            return Err(SchemaError::invalid_type_ref(s, "trailing input"));
        }
        Ok(ty)
    }
}

fn parse_type<'a>(input: &'a str, full: &str) -> Result<(SchemaType, &'a str), SchemaError> {
    let input = input.trim_start();

    let (ty, rest) = if let Some(inner) = input.strip_prefix('[') {
        let (elem, rest) = parse_type(inner, full)?;
        let rest = rest
            .trim_start()
            .strip_prefix(']')
            .ok_or_else(|| SchemaError::invalid_type_ref(full, "unclosed list"))?;
        (SchemaType::list(elem), rest)
    } else {
        let end = input
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(input.len());
        if end == 0 {
            return Err(SchemaError::invalid_type_ref(full, "expected a type name"));
        }
        (SchemaType::named(&input[..end]), &input[end..])
    };

    let trimmed = rest.trim_start();
    match trimmed.strip_prefix('!') {
        Some(rest) => Ok((ty.non_null(), rest)),
        None => Ok((ty, trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(s: &str) -> SchemaType {
        s.parse().expect("Failed to parse type")
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(ty("Int"), SchemaType::named("Int"));
        assert_eq!(ty("Int!"), SchemaType::named("Int").non_null());
    }

    #[test]
    fn test_parse_nested_lists() {
        let parsed = ty("[[String!]]!");
        assert!(parsed.is_non_null());
        let inner = parsed.elem().expect("list");
        assert!(!inner.is_non_null());
        let leaf = inner.elem().expect("list");
        assert_eq!(leaf, &SchemaType::named("String").non_null());
        assert_eq!(parsed.name(), "String");
    }

    #[test]
    fn test_display_round_trip() {
        for notation in ["ID", "[Int!]", "[Int]!", "[[Float]!]"] {
            assert_eq!(ty(notation).to_string(), notation);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!("[Int".parse::<SchemaType>().is_err());
        assert!("".parse::<SchemaType>().is_err());
        assert!("Int!!".parse::<SchemaType>().is_err());
        assert!("[]".parse::<SchemaType>().is_err());
    }

    #[test]
    fn test_add_type_duplicate() {
        let mut schema = Schema::new();
        schema
            .add_type(TypeDefinition::object("User"))
            .expect("first add");
        let result = schema.add_type(TypeDefinition::object("User"));
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_root_operations_default_names() {
        let schema = Schema::new()
            .with_type(TypeDefinition::object("Query"))
            .and_then(|s| s.with_type(TypeDefinition::object("Mutation")))
            .and_then(|s| s.with_type(TypeDefinition::object("User")))
            .expect("schema");

        assert!(schema.is_root_operation("Query"));
        assert!(schema.is_root_operation("Mutation"));
        assert!(!schema.is_root_operation("Subscription"));
        assert!(!schema.is_root_operation("User"));
    }

    #[test]
    fn test_root_operations_explicit_names() {
        let mut schema = Schema::new()
            .with_type(TypeDefinition::object("RootQuery"))
            .and_then(|s| s.with_type(TypeDefinition::object("Query")))
            .expect("schema");
        schema.query = Some("RootQuery".to_string());

        assert!(schema.is_root_operation("RootQuery"));
        assert!(!schema.is_root_operation("Query"));
    }

    #[test]
    fn test_get_implements() {
        let schema = Schema::new()
            .with_type(TypeDefinition::interface("Node"))
            .and_then(|s| s.with_type(TypeDefinition::object("User").implements("Node")))
            .and_then(|s| {
                s.with_type(TypeDefinition::union("SearchResult").member("User"))
            })
            .expect("schema");

        let names: Vec<&str> = schema
            .get_implements("User")
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Node", "SearchResult"]);
        assert!(schema.get_implements("Node").is_empty());
    }

    #[test]
    fn test_kind_of() {
        let schema = Schema::new()
            .with_type(TypeDefinition::union("Pet"))
            .expect("schema");
        assert_eq!(schema.kind_of("Pet").expect("kind"), DefinitionKind::Union);
        assert!(schema.kind_of("Missing").is_err());
        assert!(DefinitionKind::Union.is_abstract());
        assert!(!DefinitionKind::Enum.is_abstract());
    }
}
