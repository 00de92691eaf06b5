//! Emission handoff to a source renderer.

use crate::error::CodegenError;
use crate::model::ModelBundle;
use std::path::Path;

/// Everything a renderer needs to emit one model file.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Target module name.
    pub package_name: &'a str,
    /// Module path of the target module, e.g. `crate::model`.
    pub import_path: &'a str,
    /// Output file.
    pub filename: &'a Path,
    /// Descriptors to emit.
    pub data: &'a ModelBundle,
    /// Whether to prepend a "generated, do not edit" header.
    pub generated_header: bool,
}

/// Sink for finished model bundles.
pub trait Renderer {
    /// Emits the bundle described by `options`.
    ///
    /// # Errors
    /// Returns `CodegenError` if emission fails.
    fn render(&self, options: &RenderOptions<'_>) -> Result<(), CodegenError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, options: &RenderOptions<'_>) -> Result<(), CodegenError> {
        (**self).render(options)
    }
}
