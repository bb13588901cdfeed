//! Cart and wishlist records.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{CurrencyCode, Money};
use super::variant::{VariantKey, normalize_selector};

/// The payload handed to add-to-cart and wishlist toggles.
///
/// Built by the product grid (no variant selectors) or the product detail
/// page (colour and optionally size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    /// Catalog identifier.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Human-readable price, e.g. `"₦28,500"`.
    pub price_display: String,
    /// Image shown in the drawer and wishlist grid.
    pub image: String,
    /// Selected colour name.
    pub selected_color: Option<String>,
    /// Selected size value.
    pub selected_size: Option<String>,
}

impl CartProduct {
    /// Create a product payload with no variant selected.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price_display: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price_display: price_display.into(),
            image: image.into(),
            selected_color: None,
            selected_size: None,
        }
    }

    /// Set the selected colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.selected_color = normalize_selector(Some(color.into()));
        self
    }

    /// Set the selected size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.selected_size = normalize_selector(Some(size.into()));
        self
    }

    /// Identity of this configuration.
    #[must_use]
    pub fn variant_key(&self) -> VariantKey {
        VariantKey::new(
            self.product_id.clone(),
            self.selected_color.as_deref(),
            self.selected_size.as_deref(),
        )
    }

    /// Unit price parsed from the display string.
    #[must_use]
    pub fn unit_price(&self, currency_code: CurrencyCode) -> Money {
        Money::parse_display(&self.price_display, currency_code)
    }
}

/// A cart entry.
///
/// `quantity` is at least 1 for as long as the entry exists; the store
/// removes entries instead of leaving them at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The configuration being purchased.
    #[serde(flatten)]
    pub product: CartProduct,
    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// A fresh cart entry with quantity 1.
    #[must_use]
    pub const fn new(product: CartProduct) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Identity of this entry.
    #[must_use]
    pub fn variant_key(&self) -> VariantKey {
        self.product.variant_key()
    }

    /// `unit price × quantity`.
    #[must_use]
    pub fn line_total(&self, currency_code: CurrencyCode) -> Money {
        self.product.unit_price(currency_code).times(self.quantity)
    }
}

/// A wishlist entry: a cart product without a quantity.
pub type WishlistEntry = CartProduct;
