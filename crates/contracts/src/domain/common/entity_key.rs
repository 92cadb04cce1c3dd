use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Key by which the back office addresses an entity in API routes
pub trait EntityKey:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Key as it appears in a URL path segment
    fn as_string(&self) -> String;

    /// Parse a key taken from a route parameter
    fn from_string(s: &str) -> Result<Self, String>;
}
