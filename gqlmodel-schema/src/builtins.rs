//! Built-in scalar types.

use crate::types::{Schema, TypeDefinition};

/// Scalars every GraphQL schema provides implicitly.
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

impl Schema {
    /// Adds the built-in scalars that the schema does not declare itself.
    ///
    /// Returns the number of injected definitions.
    pub fn inject_builtins(&mut self) -> usize {
        let mut injected = 0;
        for name in BUILTIN_SCALARS {
            if !self.has_type(name) {
                self.types.push(TypeDefinition::scalar(name).built_in());
                injected += 1;
            }
        }
        if injected > 0 {
            self.build_type_map();
        }
        injected
    }
}
