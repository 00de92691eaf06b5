//! Enum code generation.

use super::push_doc;
use crate::model::{Enum, ModelBundle};

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    bundle: &'a ModelBundle,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(bundle: &'a ModelBundle) -> Self {
        Self { bundle }
    }

    /// Generates all enum definitions.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for def in &self.bundle.enums {
            output.push_str(&self.generate_enum(def));
        }

        output
    }

    /// Generates an enum with its string conversions.
    fn generate_enum(&self, def: &Enum) -> String {
        let mut output = String::new();
        let name = &def.name;

        push_doc(&mut output, def.description.as_deref(), "");
        output.push_str(
            "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]\n",
        );
        output.push_str(&format!("pub enum {} {{\n", name));
        for value in &def.values {
            push_doc(&mut output, value.description.as_deref(), "    ");
            output.push_str(&format!(
                "    #[serde(rename = \"{}\")]\n",
                value.value.escape_default()
            ));
            output.push_str(&format!("    {},\n", value.name));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {} {{\n", name));
        output.push_str("    /// All values in schema order.\n");
        output.push_str(&format!(
            "    pub const ALL: [Self; {}] = [{}];\n\n",
            def.values.len(),
            def.values
                .iter()
                .map(|v| format!("Self::{}", v.name))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        output.push_str(&format!("    /// Returns the `{}` literal.\n", def.raw));
        output.push_str("    #[must_use]\n");
        output.push_str("    pub const fn as_str(&self) -> &'static str {\n");
        output.push_str("        match *self {\n");
        for value in &def.values {
            output.push_str(&format!(
                "            Self::{} => \"{}\",\n",
                value.name,
                value.value.escape_default()
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl std::fmt::Display for {} {{\n", name));
        output.push_str(
            "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n",
        );
        output.push_str("        f.write_str(self.as_str())\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl std::str::FromStr for {} {{\n", name));
        output.push_str("    type Err = std::string::String;\n\n");
        output.push_str("    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {\n");
        output.push_str("        match s {\n");
        for value in &def.values {
            output.push_str(&format!(
                "            \"{}\" => std::result::Result::Ok(Self::{}),\n",
                value.value.escape_default(),
                value.name
            ));
        }
        output.push_str(&format!(
            "            _ => std::result::Result::Err(std::format!(\"{{}} is not a valid {}\", s)),\n",
            def.raw
        ));
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }
}
