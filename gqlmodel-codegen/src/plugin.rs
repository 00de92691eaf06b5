//! The model generation plugin.

use crate::binder::Binder;
use crate::config::Config;
use crate::error::CodegenError;
use crate::model::ModelBundle;
use crate::registry;
use crate::render::{RenderOptions, Renderer};
use crate::rust::RustRenderer;
use crate::walker::SchemaWalker;
use gqlmodel_schema::Schema;

/// A named generation stage.
pub trait Plugin {
    /// Returns the plugin name.
    fn name(&self) -> &'static str;
}

/// A plugin that updates the configuration for later stages.
pub trait ConfigMutator: Plugin {
    /// Runs the plugin against `config` and `schema`.
    ///
    /// # Errors
    /// Returns `CodegenError` if any step fails; nothing is emitted then.
    fn mutate_config(
        &self,
        config: &mut Config,
        schema: &mut Schema,
        binder: &dyn Binder,
    ) -> Result<Generation, CodegenError>;
}

/// Outcome of a model generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The sorted descriptors.
    pub bundle: ModelBundle,
    /// Whether the renderer was invoked.
    pub emitted: bool,
}

/// Generates model types for every schema type without a user-defined model.
#[derive(Debug, Clone, Default)]
pub struct ModelGen<R = RustRenderer> {
    renderer: R,
}

impl ModelGen<RustRenderer> {
    /// Creates a plugin that writes Rust source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Renderer> ModelGen<R> {
    /// Creates a plugin emitting through `renderer`.
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R> Plugin for ModelGen<R> {
    fn name(&self) -> &'static str {
        "modelgen"
    }
}

impl<R: Renderer> ConfigMutator for ModelGen<R> {
    /// Walks the schema, emits the model file and then registers every
    /// generated type in `config.models`.
    ///
    /// Built-in scalars are injected into both the schema and the
    /// configuration first, so `binder` must know their targets (see
    /// [`StaticBinder::with_builtins`](crate::binder::StaticBinder::with_builtins)).
    /// Emission is skipped when no objects and no enums were produced.
    fn mutate_config(
        &self,
        config: &mut Config,
        schema: &mut Schema,
        binder: &dyn Binder,
    ) -> Result<Generation, CodegenError> {
        config.check()?;
        schema.inject_builtins();

        // Work on a copy so a failed run leaves the caller's registry as it was.
        let mut staged = config.clone();
        staged.inject_builtins();

        let mut bundle = SchemaWalker::new(schema, &staged, binder).walk()?;
        registry::sort_bundle(&mut bundle);

        let emitted = if bundle.is_empty() {
            tracing::debug!(
                "No models or enums for {}, skipping {}",
                staged.model.package,
                staged.model.filename.display()
            );
            false
        } else {
            self.renderer.render(&RenderOptions {
                package_name: &staged.model.package,
                import_path: &staged.model.path,
                filename: &staged.model.filename,
                data: &bundle,
                generated_header: true,
            })?;
            true
        };

        registry::register_bundle(&bundle, &mut staged.models, &staged.model.path);
        *config = staged;

        Ok(Generation { bundle, emitted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::StaticBinder;
    use gqlmodel_schema::{FieldDefinition, TypeDefinition};
    use std::cell::Cell;
    use std::io;

    #[derive(Default)]
    struct CountingRenderer {
        calls: Cell<usize>,
    }

    impl Renderer for CountingRenderer {
        fn render(&self, _options: &RenderOptions<'_>) -> Result<(), CodegenError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&self, _options: &RenderOptions<'_>) -> Result<(), CodegenError> {
            Err(io::Error::other("disk full").into())
        }
    }

    fn user_schema() -> Schema {
        Schema::new()
            .with_type(
                TypeDefinition::object("User").field(FieldDefinition::new(
                    "name",
                    "String!".parse().expect("type"),
                )),
            )
            .expect("schema")
    }

    #[test]
    fn test_plugin_name() {
        assert_eq!(ModelGen::new().name(), "modelgen");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let plugin = ModelGen::with_renderer(CountingRenderer::default());
        let mut config = Config::default();
        config.model.package = String::new();
        let mut schema = Schema::new();

        let result = plugin.mutate_config(&mut config, &mut schema, &StaticBinder::with_builtins());
        assert!(matches!(result, Err(CodegenError::Config { .. })));
        assert_eq!(plugin.renderer().calls.get(), 0);
    }

    #[test]
    fn test_renders_models() {
        let plugin = ModelGen::with_renderer(CountingRenderer::default());
        let mut config = Config::default();
        let mut schema = user_schema();

        let generation = plugin
            .mutate_config(&mut config, &mut schema, &StaticBinder::with_builtins())
            .expect("generation");

        assert!(generation.emitted);
        assert_eq!(plugin.renderer().calls.get(), 1);
        assert_eq!(config.models.model("User"), Some("crate::model::User"));
    }

    #[test]
    fn test_render_failure_leaves_registry_unchanged() {
        let plugin = ModelGen::with_renderer(FailingRenderer);
        let mut config = Config::default();
        let before = config.clone();

        let result =
            plugin.mutate_config(&mut config, &mut user_schema(), &StaticBinder::with_builtins());

        let err = result.expect_err("render should fail");
        assert!(err.to_string().contains("disk full"));
        assert_eq!(config.models.model("User"), None);
        assert_eq!(config, before);
    }
}
