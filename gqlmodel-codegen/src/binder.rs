//! Lookup of hand-written Rust types referenced by the configuration.

use crate::error::BindError;
use crate::model::TypeIdentity;
use std::collections::BTreeSet;

/// Resolves a declared (package, name) location to a concrete type.
pub trait Binder {
    /// Finds the type `name` declared in `package`.
    ///
    /// # Errors
    /// Returns `BindError::NotFound` if no such type is known.
    fn find_type(&self, package: &str, name: &str) -> Result<TypeIdentity, BindError>;
}

/// Splits a qualified path into its package and local name.
///
/// `std::string::String` becomes (`std::string`, `String`); a bare name has
/// an empty package.
#[must_use]
pub fn split_qualified(path: &str) -> (&str, &str) {
    path.rsplit_once("::").unwrap_or(("", path))
}

/// Binder backed by an explicit set of known types.
#[derive(Debug, Clone, Default)]
pub struct StaticBinder {
    known: BTreeSet<TypeIdentity>,
}

impl StaticBinder {
    /// Creates an empty binder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a binder that knows the targets of the built-in scalars.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut binder = Self::new();
        for path in ["i32", "f64", "bool", "std::string::String"] {
            binder.register(path);
        }
        binder
    }

    /// Registers a type by qualified path.
    pub fn register(&mut self, path: &str) -> &mut Self {
        let (package, name) = split_qualified(path);
        self.known.insert(TypeIdentity::new(package, name));
        self
    }

    /// Returns the number of known types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Returns true if no types are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Binder for StaticBinder {
    fn find_type(&self, package: &str, name: &str) -> Result<TypeIdentity, BindError> {
        let identity = TypeIdentity::new(package, name);
        if self.known.contains(&identity) {
            Ok(identity)
        } else {
            Err(BindError::NotFound {
                package: package.to_string(),
                name: name.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qualified() {
        assert_eq!(split_qualified("std::string::String"), ("std::string", "String"));
        assert_eq!(split_qualified("bool"), ("", "bool"));
    }

    #[test]
    fn test_static_binder() {
        let mut binder = StaticBinder::with_builtins();
        binder.register("crate::scalars::DateTime");
        assert_eq!(binder.len(), 5);

        let found = binder
            .find_type("crate::scalars", "DateTime")
            .expect("registered type");
        assert_eq!(found.qualified(), "crate::scalars::DateTime");
        assert!(binder.find_type("", "i32").is_ok());

        let err = binder.find_type("crate::scalars", "Time").unwrap_err();
        assert_eq!(
            err,
            BindError::NotFound {
                package: "crate::scalars".to_string(),
                name: "Time".to_string(),
            }
        );
    }
}
