//! Persisted record tree.
//!
//! These structs mirror the on-disk JSON field for field. They are kept
//! separate from the `luty-core` entities; [`crate::adapters`] maps between
//! the two. Field declaration order is serialization order.
//!
//! Decoding is lenient in the same way older writers were: a missing field
//! or an explicit `null` reads as the zero value (`0`, `""`, `[]`).

use serde::{Deserialize, Deserializer, Serialize};

/// Schema version written on every fresh galaxy serialization.
pub const GALAXY_VERSION: u32 = 1;

/// Read `null` as `T::default()`. Pair with `#[serde(default)]` for absent fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{"meta": {...}, "systems": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalaxyFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub systems: Vec<SystemRecord>,
}

/// Forward-compatibility marker. Not interpreted on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub z: i64,
    /// Canonical kind label, e.g. `"Blue Super Giant"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
}

/// `{"accounts": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub accounts: Vec<AccountRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "user-id", default, deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Hashed secret, stored as-is.
    #[serde(default, deserialize_with = "null_as_default")]
    pub secret: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}
