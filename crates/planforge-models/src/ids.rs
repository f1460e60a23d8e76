//! Type-safe ID wrappers for Planforge.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtypes with common functionality.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random ID.
            pub fn new() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4()))
            }

            /// Creates an ID from an existing string (for deserialization/testing).
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the ID carries no identity at all.
            ///
            /// Records coming from loosely-typed snapshots can arrive with an
            /// empty id field; such records are treated as malformed.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProjectId, "proj");
define_id!(DrawingSetId, "dwg");
define_id!(RfiId, "rfi");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_set_id_prefix() {
        let id = DrawingSetId::new();
        assert!(id.as_str().starts_with("dwg-"));
    }

    #[test]
    fn test_rfi_id_prefix() {
        let id = RfiId::new();
        assert!(id.as_str().starts_with("rfi-"));
    }

    #[test]
    fn test_id_from_string() {
        let id = DrawingSetId::from_string("dwg-custom-123");
        assert_eq!(id.as_str(), "dwg-custom-123");
    }

    #[test]
    fn test_id_is_empty() {
        assert!(DrawingSetId::from_string("").is_empty());
        assert!(!DrawingSetId::new().is_empty());
    }

    #[test]
    fn test_id_serialization() {
        let id = RfiId::from_string("rfi-test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"rfi-test\"");

        let parsed: RfiId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = ProjectId::from_string("proj-123");
        assert_eq!(format!("{}", id), "proj-123");
    }
}
