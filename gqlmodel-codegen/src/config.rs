//! Generation configuration and the shared model registry.

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where generated models go.
    pub model: PackageConfig,
    /// Schema type name to user-defined model mapping.
    pub models: TypeMap,
}

impl Config {
    /// Creates a configuration with the given model package.
    #[must_use]
    pub fn new(model: PackageConfig) -> Self {
        Self {
            model,
            models: TypeMap::default(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` describing the first problem found.
    pub fn check(&self) -> Result<(), CodegenError> {
        self.model.check()?;

        for (name, entry) in &self.models.0 {
            for model in &entry.model {
                if model.is_empty() || model.split("::").any(str::is_empty) {
                    return Err(CodegenError::config(format!(
                        "model '{}' for type '{}' is not a valid type path",
                        model, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Maps the built-in scalars to Rust primitives unless already mapped.
    pub fn inject_builtins(&mut self) {
        const BUILTINS: [(&str, &str); 5] = [
            ("Int", "i32"),
            ("Float", "f64"),
            ("String", "std::string::String"),
            ("Boolean", "bool"),
            ("ID", "std::string::String"),
        ];

        for (name, model) in BUILTINS {
            if !self.models.user_defined(name) {
                self.models.add(name, model);
            }
        }
    }
}

/// Target package for generated models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Output file.
    pub filename: PathBuf,
    /// Module name.
    pub package: String,
    /// Module path used to qualify generated types.
    pub path: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::from("model.rs"),
            package: "model".to_string(),
            path: "crate::model".to_string(),
        }
    }
}

impl PackageConfig {
    /// Creates a package config.
    #[must_use]
    pub fn new(
        filename: impl Into<PathBuf>,
        package: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            package: package.into(),
            path: path.into(),
        }
    }

    /// Returns the module path generated identities are qualified with.
    #[must_use]
    pub fn import_path(&self) -> &str {
        &self.path
    }

    fn check(&self) -> Result<(), CodegenError> {
        if !is_identifier(&self.package) {
            return Err(CodegenError::config(format!(
                "model package '{}' is not a valid module name",
                self.package
            )));
        }
        if self.filename.extension().and_then(|e| e.to_str()) != Some("rs") {
            return Err(CodegenError::config(format!(
                "model filename '{}' must end in .rs",
                self.filename.display()
            )));
        }
        if !self.path.split("::").all(is_identifier) {
            return Err(CodegenError::config(format!(
                "model path '{}' is not a valid module path",
                self.path
            )));
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Per-type model overrides, keyed by schema type name.
///
/// This is the registry generation runs read from and register into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMap(pub BTreeMap<String, TypeMapEntry>);

impl TypeMap {
    /// Returns true if the schema type is bound to a hand-written model.
    #[must_use]
    pub fn user_defined(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|entry| !entry.model.is_empty())
    }

    /// Returns the entry for a schema type.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeMapEntry> {
        self.0.get(name)
    }

    /// Returns the first model bound to a schema type.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|entry| entry.model.first())
            .map(String::as_str)
    }

    /// Appends a model binding for a schema type.
    pub fn add(&mut self, name: impl Into<String>, model: impl Into<String>) {
        self.0.entry(name.into()).or_default().model.push(model.into());
    }

    /// Returns the configured Rust name for a field, if overridden.
    #[must_use]
    pub fn field_name_override(&self, type_name: &str, field: &str) -> Option<&str> {
        self.0
            .get(type_name)
            .and_then(|entry| entry.fields.get(field))
            .and_then(|f| f.field_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Sets a field name override.
    pub fn set_field_name(
        &mut self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        field_name: impl Into<String>,
    ) {
        self.0
            .entry(type_name.into())
            .or_default()
            .fields
            .entry(field.into())
            .or_default()
            .field_name = Some(field_name.into());
    }
}

/// Overrides for a single schema type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeMapEntry {
    /// Qualified Rust types bound to this schema type.
    pub model: Vec<String>,
    /// Per-field overrides.
    pub fields: BTreeMap<String, TypeMapField>,
}

/// Overrides for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeMapField {
    /// Rust field name to use instead of the transformed schema name.
    pub field_name: Option<String>,
}
