//! Interned node identifiers
//!
//! Nodes are keyed by short names (`github_repo`, `lambda_api`, ...). The
//! [`Id`] type interns those names so identifiers are `Copy` and cheap to
//! compare while edges reference them.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Interned identifier of a diagram node.
///
/// # Examples
///
/// ```
/// use cloudsketch_core::identifier::Id;
///
/// let lambda = Id::new("lambda_api");
/// assert_eq!(lambda, "lambda_api");
/// assert_eq!(lambda, Id::from("lambda_api"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns the interned name.
    pub fn as_string(&self) -> String {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_string()
        })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_id() {
        let id1 = Id::new("s3_frontend");
        let id2 = Id::new("s3_frontend");
        let id3 = Id::new("lambda_api");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_display_and_as_string() {
        let id = Id::new("rds_postgres");
        assert_eq!(format!("{id}"), "rds_postgres");
        assert_eq!(id.as_string(), "rds_postgres");
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("cloudwatch");
        assert!(id == "cloudwatch");
        assert!(id != "cloud");

        let name = String::from("cloudwatch");
        assert!(id == name.as_str());
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Id::new("users"), 1);
        map.insert(Id::new("github_repo"), 2);

        assert_eq!(map.get(&Id::from("users")), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
