//! Rust source rendering of model bundles.

pub mod enums;
pub mod interfaces;
pub mod objects;
pub mod types;

pub use enums::EnumGenerator;
pub use interfaces::InterfaceGenerator;
pub use objects::ObjectGenerator;

use crate::error::CodegenError;
use crate::model::ModelBundle;
use crate::render::{RenderOptions, Renderer};

/// Header marking a file as generated.
pub const GENERATED_HEADER: &str = "// Code generated by gqlmodel, DO NOT EDIT.\n\n";

/// Renders a bundle to Rust source.
#[must_use]
pub fn generate(bundle: &ModelBundle, package: &str, generated_header: bool) -> String {
    let mut output = String::new();

    if generated_header {
        output.push_str(GENERATED_HEADER);
    }
    output.push_str(&format!("//! Models for the `{}` module.\n\n", bundle.package_name));

    output.push_str(&InterfaceGenerator::new(bundle).generate());
    output.push_str(&ObjectGenerator::new(bundle, package).generate());
    output.push_str(&EnumGenerator::new(bundle).generate());

    output
}

/// Renderer writing Rust source to the configured file.
///
/// Types from the target module are written unqualified.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl Renderer for RustRenderer {
    fn render(&self, options: &RenderOptions<'_>) -> Result<(), CodegenError> {
        let source = generate(options.data, options.import_path, options.generated_header);

        if let Some(parent) = options.filename.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(options.filename, source)?;

        tracing::info!(
            "Wrote {} models and {} enums for {} to {}",
            options.data.models.len(),
            options.data.enums.len(),
            options.package_name,
            options.filename.display()
        );
        Ok(())
    }
}

/// Writes a description as doc comment lines at the given indent.
pub(crate) fn push_doc(output: &mut String, description: Option<&str>, indent: &str) {
    if let Some(description) = description {
        for line in description.lines() {
            if line.trim().is_empty() {
                output.push_str(&format!("{}///\n", indent));
            } else {
                output.push_str(&format!("{}/// {}\n", indent, line.trim_end()));
            }
        }
    }
}
