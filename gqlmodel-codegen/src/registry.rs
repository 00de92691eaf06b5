//! Ordering of finished descriptors and their registration as models.
//!
//! Registration only happens once the walk and the render have both
//! succeeded: until then the registry is read-only, and every generated type
//! is still reachable through the symbol table.

use crate::config::TypeMap;
use crate::model::ModelBundle;

/// Sorts every descriptor list by Rust name.
pub fn sort_bundle(bundle: &mut ModelBundle) {
    bundle.enums.sort_by(|a, b| a.name.cmp(&b.name));
    bundle.models.sort_by(|a, b| a.name.cmp(&b.name));
    bundle.interfaces.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Binds each generated descriptor's schema name to its qualified Rust path.
///
/// Later generation stages then treat these types as user-defined and
/// reference them instead of generating them again.
pub fn register_bundle(bundle: &ModelBundle, models: &mut TypeMap, import_path: &str) {
    for it in &bundle.enums {
        models.add(&it.raw, format!("{}::{}", import_path, it.name));
    }
    for it in &bundle.models {
        models.add(&it.raw, format!("{}::{}", import_path, it.name));
    }
    for it in &bundle.interfaces {
        models.add(&it.raw, format!("{}::{}", import_path, it.name));
    }
    tracing::debug!(
        "Registered {} enums, {} models, {} interfaces",
        bundle.enums.len(),
        bundle.models.len(),
        bundle.interfaces.len()
    );
}
