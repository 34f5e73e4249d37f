/*!
 * Core Types
 * Common types used across the simulator
 */

use crate::core::limits::MAX_OWNER_NAME_LEN;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Address type for pool offsets
pub type Address = usize;

/// Size type for byte counts
pub type Size = usize;

/// Bounded, inline-optimized process name
///
/// Construction truncates to [`MAX_OWNER_NAME_LEN`] bytes at a UTF-8
/// character boundary, so two names that agree on their first 32 bytes
/// identify the same owner. Names at or below the inline threshold
/// (23 bytes on 64-bit) are stored without heap allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct OwnerName {
    inner: SmartString,
}

impl OwnerName {
    /// Create an owner name, truncating to the byte limit
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(MAX_OWNER_NAME_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            inner: SmartString::from(&name[..end]),
        }
    }

    /// Get string slice
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Get length in bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<&str> for OwnerName {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for OwnerName {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for OwnerName {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Serialized as a plain string; deserialization re-applies the truncation
// so the byte limit holds for every construction path.
impl Serialize for OwnerName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OwnerName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(OwnerName::new(&s))
    }
}
