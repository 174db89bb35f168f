//! Newtype wrappers for string identifiers, providing compile-time type safety.
//!
//! All newtypes serialize/deserialize as plain strings for storage
//! compatibility.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new instance from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Return the inner string as a slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<String> for $name {
            fn eq(&self, other: &String) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for String {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_newtype!(
    /// Stable content-addressable asset identifier, unique within storage.
    ///
    /// `bundle-<raw manifest id>` for a launch asset, `<packagerHash>.<type>`
    /// for every other asset.
    AssetKey
);

string_newtype!(
    /// Identifies which application/project an update belongs to. Supplied by
    /// configuration, never by the manifest.
    ScopeKey
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_key_display_and_as_ref() {
        let key = AssetKey::new("abcd.png");
        assert_eq!(key.to_string(), "abcd.png");
        assert_eq!(key.as_str(), "abcd.png");
        assert_eq!(AsRef::<str>::as_ref(&key), "abcd.png");
    }

    #[test]
    fn asset_key_serde_roundtrip() {
        let key = AssetKey::new("bundle-deadbeef");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"bundle-deadbeef\"");
        let back: AssetKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn scope_key_from_str() {
        let scope = ScopeKey::from("com.example.app");
        assert_eq!(scope.as_str(), "com.example.app");
    }

    #[test]
    fn asset_key_into_inner() {
        let key = AssetKey::new("hash.ttf".to_owned());
        assert_eq!(key.into_inner(), "hash.ttf");
    }

    #[test]
    fn asset_key_equality() {
        let a = AssetKey::new("same.js");
        let b = AssetKey::new("same.js");
        let c = AssetKey::new("diff.js");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
