//! Interface and union code generation.

use super::push_doc;
use crate::model::ModelBundle;

/// Generator for interface marker traits.
pub struct InterfaceGenerator<'a> {
    bundle: &'a ModelBundle,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(bundle: &'a ModelBundle) -> Self {
        Self { bundle }
    }

    /// Generates all interface traits.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for iface in &self.bundle.interfaces {
            push_doc(&mut output, iface.description.as_deref(), "");
            output.push_str(&format!("pub trait {}: std::fmt::Debug {{}}\n\n", iface.name));
        }

        output
    }
}
