//! Applies a field's list/non-null modifier chain to its resolved base type.

use crate::model::{TargetType, TypeOrigin};
use gqlmodel_schema::{DefinitionKind, SchemaType};

/// Wraps `base` according to the modifier chain of `ty`.
///
/// Interface and union bases are always placed behind shared indirection,
/// including the non-null case, because the concrete variant is unknown.
/// Every other base follows the nullability written in the schema.
#[must_use]
pub fn copy_modifiers(ty: &SchemaType, base_kind: DefinitionKind, base: &TypeOrigin) -> TargetType {
    let wrapped = match ty {
        SchemaType::Named { .. } => {
            let value = TargetType::Base(base.clone());
            if base_kind.is_abstract() {
                TargetType::Shared(Box::new(value))
            } else {
                value
            }
        }
        SchemaType::List { elem, .. } => {
            TargetType::List(Box::new(copy_modifiers(elem, base_kind, base)))
        }
    };

    if ty.is_non_null() {
        wrapped
    } else {
        TargetType::Optional(Box::new(wrapped))
    }
}
