//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog item (plant, blog post).
///
/// The fixture data assigns integer ids (`plantId`, blog `id`), but string
/// ids are tolerated: the source is not validated against a schema, so the
/// identifier preserves whatever the data carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemId::Int(n) => core::fmt::Display::fmt(n, f),
            ItemId::Str(s) => core::fmt::Display::fmt(s, f),
        }
    }
}

impl FromStr for ItemId {
    type Err = core::convert::Infallible;

    /// Path segments arrive as text; digits parse as the integer form so
    /// `/plants/3` matches an item whose source id was the number 3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Int(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) => ItemId::Int(n),
            Err(_) => ItemId::Str(value.to_string()),
        }
    }
}

/// Identifier of a user, assigned by the external identity provider.
///
/// Opaque: the provider controls the format, we only compare and display it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_parses_digits_as_int() {
        let id: ItemId = "42".parse().unwrap();
        assert_eq!(id, ItemId::Int(42));
    }

    #[test]
    fn item_id_parses_non_digits_as_str() {
        let id: ItemId = "fern-01".parse().unwrap();
        assert_eq!(id, ItemId::Str("fern-01".to_string()));
    }

    #[test]
    fn item_id_deserializes_both_forms() {
        let int_id: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(int_id, ItemId::Int(7));

        let str_id: ItemId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(str_id, ItemId::Str("abc".to_string()));
    }
}
