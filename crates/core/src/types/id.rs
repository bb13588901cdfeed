//! Product identifiers.
//!
//! Catalog entries are keyed by opaque strings (`"1"`, `"essential-hoodie"`, ...),
//! so the identifier wraps a `String` rather than an integer.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A type-safe product identifier.
///
/// Stable per catalog entry. The value is opaque: nothing in the storefront
/// parses or splits it, so any character is allowed.
///
/// # Example
///
/// ```rust
/// use vitrine_core::ProductId;
///
/// let id = ProductId::from("1");
/// assert_eq!(id.as_str(), "1");
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
