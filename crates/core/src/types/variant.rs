//! Variant keys: the identity of a cart or wishlist entry.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Composite identity of a purchasable configuration.
///
/// Two entries with equal keys denote the same product in the same colour
/// and size. The key is a structured tuple, never a concatenated string, so
/// `("1-x", "y")` and `("1", "x-y")` stay distinct.
///
/// Absence of a selector is always `None`. A colour literally named
/// `"none"` is an ordinary value and does not collide with "no colour".
///
/// # Example
///
/// ```rust
/// use vitrine_core::VariantKey;
///
/// let black_m = VariantKey::new("1", Some("Black"), Some("M"));
/// let plain = VariantKey::new("1", None, None);
/// assert_ne!(black_m, plain);
/// assert_eq!(plain.to_string(), "1/-/-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    product_id: ProductId,
    color: Option<String>,
    size: Option<String>,
}

impl VariantKey {
    /// Build a key from its parts.
    ///
    /// Selectors are normalized with [`normalize_selector`], so `Some("")`
    /// and `None` produce the same key.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            color: normalize_selector(color.map(str::to_owned)),
            size: normalize_selector(size.map(str::to_owned)),
        }
    }

    /// The product this key refers to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Selected colour, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Selected size, if any.
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }
}

/// Trim a variant selector and collapse blank values to `None`.
#[must_use]
pub fn normalize_selector(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// Renders `id/color/size` for logs. `-` marks an absent selector; `\`, `/`
/// and a literal `-` selector are backslash-escaped.
impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, self.product_id.as_str())?;
        for part in [&self.color, &self.size] {
            f.write_str("/")?;
            match part.as_deref() {
                None => f.write_str("-")?,
                Some("-") => f.write_str("\\-")?,
                Some(value) => write_escaped(f, value)?,
            }
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        if matches!(c, '\\' | '/') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_separator_inside_identifier_does_not_collide() {
        let a = VariantKey::new("1-x", Some("y"), None);
        let b = VariantKey::new("1", Some("x-y"), None);
        assert_ne!(a, b);

        let c = VariantKey::new("1/x", Some("y"), None);
        let d = VariantKey::new("1", Some("x/y"), None);
        assert_ne!(c, d);
        assert_ne!(c.to_string(), d.to_string());
    }

    #[test]
    fn test_literal_none_is_a_value() {
        let absent = VariantKey::new("1", None, None);
        let named = VariantKey::new("1", Some("none"), Some("none"));
        assert_ne!(absent, named);
    }

    #[test]
    fn test_blank_selectors_are_absent() {
        assert_eq!(
            VariantKey::new("1", Some("  "), Some("")),
            VariantKey::new("1", None, None)
        );
        assert_eq!(
            VariantKey::new("1", Some(" Black "), None).color(),
            Some("Black")
        );
    }

    #[test]
    fn test_keys_hash_by_all_parts() {
        let keys: HashSet<VariantKey> = [
            VariantKey::new("1", Some("Black"), Some("M")),
            VariantKey::new("1", Some("Black"), Some("L")),
            VariantKey::new("1", Some("Navy"), Some("M")),
            VariantKey::new("1", Some("Black"), Some("M")),
        ]
        .into_iter()
        .collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            VariantKey::new("1", Some("Heather Gray"), Some("XL")).to_string(),
            "1/Heather Gray/XL"
        );
        assert_eq!(VariantKey::new("1", Some("-"), None).to_string(), "1/\\-/-");
    }
}
