//! Cache Value Module
//!
//! Defines the write-side value contract. Callers choose the representation
//! explicitly: a scalar variant goes to the store through its native typed
//! write, while [`CacheValue::json`] serializes structured data to JSON text
//! up front. There is no runtime shape inspection and no fallback path; a
//! value that cannot be serialized never reaches the store.

use serde::Serialize;

use crate::error::{CacheError, Result};

// == Cache Value ==
/// A value accepted by [`CacheManager::set`](crate::CacheManager::set).
///
/// Scalars round-trip through the store unchanged; structured data must be
/// wrapped via [`CacheValue::json`], which fails early on serialization errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    /// Raw text, stored as-is
    Text(String),
    /// Signed integer, stored via the store's native integer encoding
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean, stored via the store's native boolean encoding
    Bool(bool),
}

impl CacheValue {
    // == JSON Constructor ==
    /// Serializes `value` to canonical JSON text and wraps it as [`CacheValue::Text`].
    ///
    /// Returns [`CacheError::Serialize`] if the value is not JSON-representable.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        let text = serde_json::to_string(value).map_err(CacheError::Serialize)?;
        Ok(Self::Text(text))
    }

    // == Text Form ==
    /// Returns the textual form of the value as the store would hold it.
    ///
    /// Matches the wire encoding used by the Redis backend: integers and
    /// floats in decimal notation, booleans as "1"/"0".
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(v) => v.clone(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
        }
    }
}

// == Conversions ==
impl From<String> for CacheValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for CacheValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<i64> for CacheValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for CacheValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for CacheValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
