//! Object and input object code generation.

use super::push_doc;
use super::types::render_type;
use crate::model::{ModelBundle, Object, TypeOrigin};
use std::collections::HashSet;

const FULL_DERIVES: &str = "Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize";

/// Generator for model structs.
pub struct ObjectGenerator<'a> {
    bundle: &'a ModelBundle,
    package: &'a str,
    debug_only: HashSet<&'a str>,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator for models living in `package`.
    #[must_use]
    pub fn new(bundle: &'a ModelBundle, package: &'a str) -> Self {
        Self {
            bundle,
            package,
            debug_only: debug_only_models(bundle, package),
        }
    }

    /// Returns true if `name` derives serde and the value traits.
    #[must_use]
    pub fn derives_all(&self, name: &str) -> bool {
        !self.debug_only.contains(name)
    }

    /// Generates all model structs.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for object in &self.bundle.models {
            output.push_str(&self.generate_object(object));
        }

        output
    }

    /// Generates one struct with its interface impls.
    fn generate_object(&self, object: &Object) -> String {
        let mut output = String::new();

        let full = self.derives_all(&object.name);
        let derives = if full { FULL_DERIVES } else { "Debug" };

        push_doc(&mut output, object.description.as_deref(), "");
        output.push_str(&format!("#[derive({})]\n", derives));

        if object.fields.is_empty() {
            output.push_str(&format!("pub struct {} {{}}\n\n", object.name));
        } else {
            output.push_str(&format!("pub struct {} {{\n", object.name));
            for field in &object.fields {
                push_doc(&mut output, field.description.as_deref(), "    ");
                if full {
                    output.push_str(&format!("    {}\n", field.tag));
                }
                output.push_str(&format!(
                    "    pub {}: {},\n",
                    field.name,
                    render_type(&field.ty, self.package)
                ));
            }
            output.push_str("}\n\n");
        }

        for iface in &object.implements {
            output.push_str(&format!("impl {} for {} {{}}\n\n", iface, object.name));
        }

        output
    }
}

/// Collects the models that can only derive `Debug`.
///
/// Trait objects carry neither `Clone` nor serde impls, so a model holding
/// one loses those derives, and so does every model holding such a model.
fn debug_only_models<'a>(bundle: &'a ModelBundle, package: &str) -> HashSet<&'a str> {
    let mut debug_only: HashSet<&str> = bundle
        .models
        .iter()
        .filter(|object| object.fields.iter().any(|f| f.ty.is_shared()))
        .map(|object| object.name.as_str())
        .collect();

    loop {
        let mut changed = false;
        for object in &bundle.models {
            if debug_only.contains(object.name.as_str()) {
                continue;
            }
            let holds_debug_only = object.fields.iter().any(|f| match f.ty.base() {
                TypeOrigin::Generated(id) => {
                    id.package == package && debug_only.contains(id.name.as_str())
                }
                TypeOrigin::External(_) => false,
            });
            if holds_debug_only {
                debug_only.insert(object.name.as_str());
                changed = true;
            }
        }
        if !changed {
            return debug_only;
        }
    }
}
