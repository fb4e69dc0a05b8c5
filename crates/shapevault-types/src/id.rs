use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::ShapeKind;

/// Unique identifier for a shape.
///
/// Generated ids take the form `"{kind}-{uuid}"` where the UUID is v7, so
/// ids created later sort after ids created earlier. Ids are immutable once
/// a shape is built.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Wrap an explicit identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier for a shape of the given kind.
    pub fn generate(kind: ShapeKind) -> Self {
        Self(format!("{kind}-{}", uuid::Uuid::now_v7().simple()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeId({})", self.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ShapeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ShapeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShapeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ShapeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_kind_prefix() {
        let id = ShapeId::generate(ShapeKind::Cone);
        assert!(id.as_str().starts_with("cone-"));
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = ShapeId::generate(ShapeKind::Rectangle);
        let b = ShapeId::generate(ShapeKind::Rectangle);
        assert_ne!(a, b);
    }

    #[test]
    fn borrow_allows_str_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(ShapeId::new("r-1"), 1);
        assert_eq!(map.get("r-1"), Some(&1));
    }

    #[test]
    fn serde_is_transparent() {
        let id = ShapeId::new("rect-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"rect-7\"");
        let back: ShapeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_and_debug() {
        let id = ShapeId::new("abc");
        assert_eq!(format!("{id}"), "abc");
        assert_eq!(format!("{id:?}"), "ShapeId(abc)");
    }
}
