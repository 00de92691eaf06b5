//! Schema walk building one descriptor per generated type.

use crate::binder::Binder;
use crate::config::Config;
use crate::error::CodegenError;
use crate::model::{Enum, EnumValue, Field, Interface, ModelBundle, Object, serde_tag};
use crate::modifiers::copy_modifiers;
use crate::naming::{escape_keyword, to_field_name, to_type_name, to_variant_name};
use crate::resolver::{SymbolTable, TypeResolver};
use gqlmodel_schema::{DefinitionKind, Schema, TypeDefinition};
use std::collections::HashMap;

/// Walks every schema type once and builds the unsorted model bundle.
pub struct SchemaWalker<'a> {
    schema: &'a Schema,
    config: &'a Config,
    binder: &'a dyn Binder,
}

impl<'a> SchemaWalker<'a> {
    /// Creates a new schema walker.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a Config, binder: &'a dyn Binder) -> Self {
        Self {
            schema,
            config,
            binder,
        }
    }

    /// Builds descriptors for every type that is neither user-defined nor a
    /// root operation type.
    ///
    /// Descriptors come out in schema declaration order; sorting is left to
    /// the registry.
    ///
    /// # Errors
    /// Returns the first resolution failure; nothing is produced on error.
    pub fn walk(&self) -> Result<ModelBundle, CodegenError> {
        let symbols = SymbolTable::synthesize(self.schema, self.config)?;
        let resolver = TypeResolver::new(self.config, self.binder, &symbols);

        let mut bundle = ModelBundle {
            package_name: self.config.model.package.clone(),
            ..ModelBundle::default()
        };

        for def in &self.schema.types {
            if self.config.models.user_defined(&def.name) {
                tracing::debug!("Skipping user-defined type {}", def.name);
                continue;
            }

            match def.kind {
                DefinitionKind::Interface | DefinitionKind::Union => {
                    bundle.interfaces.push(Interface {
                        name: to_type_name(&def.name),
                        raw: def.name.clone(),
                        description: def.description.clone(),
                    });
                }
                DefinitionKind::Object | DefinitionKind::InputObject => {
                    if self.schema.is_root_operation(&def.name) {
                        tracing::debug!("Skipping root operation type {}", def.name);
                        continue;
                    }
                    bundle.models.push(self.build_object(def, &resolver)?);
                }
                DefinitionKind::Enum => {
                    bundle.enums.push(build_enum(def)?);
                }
                DefinitionKind::Scalar => {}
            }
        }

        Ok(bundle)
    }

    fn build_object(
        &self,
        def: &TypeDefinition,
        resolver: &TypeResolver<'_>,
    ) -> Result<Object, CodegenError> {
        // User-defined interfaces have no generated trait to implement.
        let implements = self
            .schema
            .get_implements(&def.name)
            .iter()
            .filter(|iface| !self.config.models.user_defined(&iface.name))
            .map(|iface| to_type_name(&iface.name))
            .collect();

        let mut fields = Vec::with_capacity(def.fields.len());
        let mut seen: HashMap<String, &str> = HashMap::with_capacity(def.fields.len());

        for field in &def.fields {
            let type_name = field.ty.name();
            let origin = resolver.resolve(type_name, &field.name)?;
            let base_kind = self.schema.kind_of(type_name)?;

            let name = match self.config.models.field_name_override(&def.name, &field.name) {
                Some(name) => escape_keyword(name.to_string()),
                None => to_field_name(&field.name),
            };
            if let Some(first) = seen.insert(name.clone(), &field.name) {
                return Err(CodegenError::collision(
                    format!("field of {}", def.name),
                    name,
                    first,
                    &field.name,
                ));
            }

            fields.push(Field {
                name,
                description: field.description.clone(),
                ty: copy_modifiers(&field.ty, base_kind, &origin),
                tag: serde_tag(&field.name),
            });
        }

        Ok(Object {
            name: to_type_name(&def.name),
            raw: def.name.clone(),
            description: def.description.clone(),
            fields,
            implements,
        })
    }
}

fn build_enum(def: &TypeDefinition) -> Result<Enum, CodegenError> {
    let mut values = Vec::with_capacity(def.enum_values.len());
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(def.enum_values.len());

    for value in &def.enum_values {
        let name = to_variant_name(&value.name);
        if let Some(first) = seen.insert(name.clone(), &value.name) {
            return Err(CodegenError::collision(
                format!("value of {}", def.name),
                name,
                first,
                &value.name,
            ));
        }
        values.push(EnumValue {
            name,
            value: value.name.clone(),
            description: value.description.clone(),
        });
    }

    Ok(Enum {
        name: to_type_name(&def.name),
        raw: def.name.clone(),
        description: def.description.clone(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::StaticBinder;
    use crate::model::{TargetType, TypeIdentity, TypeOrigin};
    use gqlmodel_schema::{EnumValueDefinition, FieldDefinition, SchemaType};

    fn ty(s: &str) -> SchemaType {
        s.parse().expect("Failed to parse type")
    }

    fn setup(schema: Schema) -> (Schema, Config) {
        let mut schema = schema;
        schema.inject_builtins();
        let mut config = Config::default();
        config.inject_builtins();
        (schema, config)
    }

    fn walk(schema: &Schema, config: &Config) -> Result<ModelBundle, CodegenError> {
        let binder = StaticBinder::with_builtins();
        SchemaWalker::new(schema, config, &binder).walk()
    }

    #[test]
    fn test_walk_classifies_kinds() {
        let (schema, config) = setup(
            Schema::new()
                .with_type(TypeDefinition::object("Query").field(FieldDefinition::new(
                    "me",
                    ty("User"),
                )))
                .and_then(|s| s.with_type(TypeDefinition::interface("Node")))
                .and_then(|s| s.with_type(TypeDefinition::union("Result").member("User")))
                .and_then(|s| {
                    s.with_type(
                        TypeDefinition::object("User")
                            .implements("Node")
                            .field(FieldDefinition::new("id", ty("ID!"))),
                    )
                })
                .and_then(|s| s.with_type(TypeDefinition::input_object("NewUser")))
                .and_then(|s| {
                    s.with_type(
                        TypeDefinition::enumeration("Role").value(EnumValueDefinition::new("ADMIN")),
                    )
                })
                .expect("schema"),
        );

        let bundle = walk(&schema, &config).expect("walk");
        assert_eq!(bundle.package_name, "model");

        let interfaces: Vec<&str> = bundle.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(interfaces, vec!["Node", "Result"]);

        let models: Vec<&str> = bundle.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(models, vec!["User", "NewUser"]);
        assert_eq!(bundle.models[0].implements, vec!["Node", "Result"]);

        assert_eq!(bundle.enums.len(), 1);
        assert_eq!(bundle.enums[0].raw, "Role");
    }

    #[test]
    fn test_field_resolution() {
        let (schema, mut config) = setup(
            Schema::new()
                .with_type(TypeDefinition::interface("Node"))
                .and_then(|s| {
                    s.with_type(
                        TypeDefinition::object("Post")
                            .field(FieldDefinition::new("createdAt", ty("String!")))
                            .field(FieldDefinition::new("author", ty("Author")))
                            .field(FieldDefinition::new("parent", ty("Node!")))
                            .field(FieldDefinition::new("id", ty("ID!"))),
                    )
                })
                .and_then(|s| s.with_type(TypeDefinition::object("Author")))
                .expect("schema"),
        );
        config.models.set_field_name("Post", "id", "post_id");

        let bundle = walk(&schema, &config).expect("walk");
        let post = bundle
            .models
            .iter()
            .find(|m| m.name == "Post")
            .expect("Post");

        let created = &post.fields[0];
        assert_eq!(created.name, "created_at");
        assert_eq!(created.tag, "#[serde(rename = \"createdAt\")]");
        assert_eq!(
            created.ty,
            TargetType::Base(TypeOrigin::External(TypeIdentity::new(
                "std::string",
                "String"
            )))
        );

        let author = &post.fields[1];
        assert_eq!(
            author.ty,
            TargetType::Optional(Box::new(TargetType::Base(TypeOrigin::Generated(
                TypeIdentity::new("crate::model", "Author")
            ))))
        );

        let parent = &post.fields[2];
        assert_eq!(
            parent.ty,
            TargetType::Shared(Box::new(TargetType::Base(TypeOrigin::Generated(
                TypeIdentity::new("crate::model", "Node")
            ))))
        );

        let id = &post.fields[3];
        assert_eq!(id.name, "post_id");
        assert_eq!(id.tag, "#[serde(rename = \"id\")]");
    }

    #[test]
    fn test_field_override_is_escaped() {
        let (schema, mut config) = setup(
            Schema::new()
                .with_type(
                    TypeDefinition::object("Item")
                        .field(FieldDefinition::new("kind", ty("String!")))
                        .field(FieldDefinition::new("owner", ty("String"))),
                )
                .expect("schema"),
        );
        config.models.set_field_name("Item", "kind", "type");
        config.models.set_field_name("Item", "owner", "self");

        let bundle = walk(&schema, &config).expect("walk");
        let fields = &bundle.models[0].fields;
        assert_eq!(fields[0].name, "r#type");
        assert_eq!(fields[0].tag, "#[serde(rename = \"kind\")]");
        assert_eq!(fields[1].name, "self_");
    }

    #[test]
    fn test_user_defined_interfaces_are_not_implemented() {
        let (schema, mut config) = setup(
            Schema::new()
                .with_type(TypeDefinition::interface("Node"))
                .and_then(|s| s.with_type(TypeDefinition::interface("Named")))
                .and_then(|s| {
                    s.with_type(
                        TypeDefinition::object("User")
                            .implements("Node")
                            .implements("Named"),
                    )
                })
                .expect("schema"),
        );
        config.models.add("Node", "crate::ext::Entity");

        let bundle = walk(&schema, &config).expect("walk");
        let interfaces: Vec<&str> = bundle.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(interfaces, vec!["Named"]);
        assert_eq!(bundle.models[0].implements, vec!["Named"]);
    }

    #[test]
    fn test_user_defined_types_are_skipped() {
        let (schema, mut config) = setup(
            Schema::new()
                .with_type(TypeDefinition::object("User"))
                .and_then(|s| s.with_type(TypeDefinition::enumeration("Role")))
                .expect("schema"),
        );
        config.models.add("User", "crate::auth::User");

        let bundle = walk(&schema, &config).expect("walk");
        assert!(bundle.models.is_empty());
        assert_eq!(bundle.enums.len(), 1);
    }

    #[test]
    fn test_enum_values_keep_raw_literal() {
        let (schema, config) = setup(
            Schema::new()
                .with_type(
                    TypeDefinition::enumeration("Status")
                        .value(EnumValueDefinition::new("ACTIVE"))
                        .value(EnumValueDefinition::new("not_found").description("gone")),
                )
                .expect("schema"),
        );

        let bundle = walk(&schema, &config).expect("walk");
        let values = &bundle.enums[0].values;
        assert_eq!(values[0].name, "Active");
        assert_eq!(values[0].value, "ACTIVE");
        assert_eq!(values[1].name, "NotFound");
        assert_eq!(values[1].value, "not_found");
        assert_eq!(values[1].description.as_deref(), Some("gone"));
    }

    #[test]
    fn test_enum_value_collision() {
        let (schema, config) = setup(
            Schema::new()
                .with_type(
                    TypeDefinition::enumeration("Status")
                        .value(EnumValueDefinition::new("NOT_FOUND"))
                        .value(EnumValueDefinition::new("notFound")),
                )
                .expect("schema"),
        );

        assert!(matches!(
            walk(&schema, &config),
            Err(CodegenError::NameCollision { .. })
        ));
    }

    #[test]
    fn test_field_collision() {
        let (schema, config) = setup(
            Schema::new()
                .with_type(
                    TypeDefinition::object("User")
                        .field(FieldDefinition::new("userId", ty("ID")))
                        .field(FieldDefinition::new("user_id", ty("ID"))),
                )
                .expect("schema"),
        );

        assert!(matches!(
            walk(&schema, &config),
            Err(CodegenError::NameCollision { .. })
        ));
    }

    #[test]
    fn test_missing_external_type_aborts() {
        let (schema, mut config) = setup(
            Schema::new()
                .with_type(TypeDefinition::scalar("DateTime"))
                .and_then(|s| {
                    s.with_type(
                        TypeDefinition::object("Event")
                            .field(FieldDefinition::new("at", ty("DateTime!"))),
                    )
                })
                .expect("schema"),
        );
        config.models.add("DateTime", "crate::scalars::DateTime");

        assert!(matches!(
            walk(&schema, &config),
            Err(CodegenError::ExternalTypeNotFound { .. })
        ));
    }
}
