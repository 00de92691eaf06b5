//! Rendering of resolved field types.

use crate::model::{TargetType, TypeOrigin};

/// Renders a target type as Rust source.
///
/// Identities living in `package` are written unqualified. Shared generated
/// types are trait objects; shared external types are boxed as-is. Wrappers
/// use full paths since generated items may shadow prelude names.
#[must_use]
pub fn render_type(ty: &TargetType, package: &str) -> String {
    match ty {
        TargetType::Base(origin) => render_origin(origin, package),
        TargetType::Shared(inner) => match inner.as_ref() {
            TargetType::Base(origin @ TypeOrigin::Generated(_)) => {
                format!("std::boxed::Box<dyn {}>", render_origin(origin, package))
            }
            other => format!("std::boxed::Box<{}>", render_type(other, package)),
        },
        TargetType::Optional(inner) => {
            format!("std::option::Option<{}>", render_type(inner, package))
        }
        TargetType::List(inner) => format!("std::vec::Vec<{}>", render_type(inner, package)),
    }
}

fn render_origin(origin: &TypeOrigin, package: &str) -> String {
    let identity = origin.identity();
    if identity.package == package {
        identity.name.clone()
    } else {
        identity.qualified()
    }
}
