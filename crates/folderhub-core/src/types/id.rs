//! Newtype wrappers around [`uuid::Uuid`] for domain identifiers.
//!
//! Using distinct types prevents accidentally passing a `FolderId` where an
//! `OrgId` is expected. The nil UUID is reserved on every identifier type
//! and never names a real entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The reserved nil identifier.
            pub const fn nil() -> Self {
                Self(Uuid::nil())
            }

            /// Whether this is the reserved nil identifier.
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse an identifier, falling back to nil on malformed input.
            pub fn parse_or_nil(s: &str) -> Self {
                s.parse().unwrap_or_else(|_| Self::nil())
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
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

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an owning organization.
    OrgId
);

define_id!(
    /// Unique identifier for a folder.
    FolderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_id_new() {
        let id1 = OrgId::new();
        let id2 = OrgId::new();
        assert_ne!(id1, id2);
        assert!(!id1.is_nil());
    }

    #[test]
    fn test_nil_sentinel() {
        assert!(OrgId::nil().is_nil());
        assert_eq!(OrgId::nil().into_uuid(), Uuid::nil());
    }

    #[test]
    fn test_org_id_display() {
        let uuid = Uuid::new_v4();
        let id = OrgId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_org_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: OrgId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id.0, uuid);
    }

    #[test]
    fn test_parse_or_nil() {
        assert!(OrgId::parse_or_nil("org2").is_nil());
        let id = OrgId::parse_or_nil("c1556e17-b7c0-45a3-a6ae-9546248fb17a");
        assert!(!id.is_nil());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = FolderId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{id}\""));
        let parsed: FolderId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
