//! Catalog records: what the storefront knows about a product.
//!
//! The catalog is read-only input. Nothing in the storefront mutates these
//! records after loading.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::line_item::CartProduct;

/// A full product record, as shown on the product detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Human-readable price, e.g. `"₦28,500"`.
    pub price_display: String,
    #[serde(default)]
    pub description: String,
    /// Breadcrumb trail, outermost first.
    #[serde(default)]
    pub breadcrumb: Vec<String>,
    /// Colour variants in display order. The first is preselected.
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    /// Sizes in display order.
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
    /// Informational sections (details, shipping, returns).
    #[serde(default)]
    pub sections: Vec<InfoSection>,
}

impl Product {
    /// Look up a size by value.
    #[must_use]
    pub fn size(&self, value: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.value == value)
    }

    /// Whether the size exists and is in stock.
    #[must_use]
    pub fn is_size_available(&self, value: &str) -> bool {
        self.size(value).is_some_and(|s| s.in_stock)
    }

    /// Build the add-to-cart payload for a colour and optional size.
    ///
    /// The first image of the chosen colour becomes the cart image. Returns
    /// `None` if the colour index is out of range, or the size is unknown or
    /// out of stock. A product without colours accepts only index 0.
    #[must_use]
    pub fn to_cart_product(&self, color_index: usize, size: Option<&str>) -> Option<CartProduct> {
        if size.is_some_and(|s| !self.is_size_available(s)) {
            return None;
        }

        let mut product = CartProduct::new(self.id.clone(), &self.name, &self.price_display, "");
        if self.colors.is_empty() {
            if color_index != 0 {
                return None;
            }
        } else {
            let color = self.colors.get(color_index)?;
            product.image = color.images.first().cloned().unwrap_or_default();
            product = product.with_color(&color.name);
        }
        if let Some(size) = size {
            product = product.with_size(size);
        }
        Some(product)
    }
}

/// A colour variant and its gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub name: String,
    /// Swatch colour, e.g. `"#111827"`.
    pub swatch: String,
    /// Image references in gallery order.
    #[serde(default)]
    pub images: Vec<String>,
}

/// A size and its static availability flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub value: String,
    pub in_stock: bool,
}

/// A titled block of copy on the product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoSection {
    pub title: String,
    pub content: String,
}

/// A product grid tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    /// Variant label shown under the name, e.g. `"Navy"`.
    pub variant_label: String,
    pub price_display: String,
    pub image_primary: String,
    /// Shown on hover.
    pub image_secondary: String,
    #[serde(default)]
    pub featured: bool,
}

impl ProductCard {
    /// Add-to-cart payload from the grid. Grid adds carry no variant selectors.
    #[must_use]
    pub fn to_cart_product(&self) -> CartProduct {
        CartProduct::new(
            self.id.clone(),
            &self.name,
            &self.price_display,
            &self.image_primary,
        )
    }
}
