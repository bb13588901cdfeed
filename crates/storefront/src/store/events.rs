//! Change notifications emitted by the [`Store`](super::Store).

use vitrine_core::{CurrencyCode, LineItem, Money, VariantKey, WishlistEntry};

/// What changed in the store.
///
/// Emitted exactly once per state-changing operation, after the new state is
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new entry was appended or an existing one merged into.
    ItemAdded { key: VariantKey, quantity: u32 },
    /// An entry left the cart.
    ItemRemoved { key: VariantKey },
    /// An entry's quantity was set to a new positive value.
    QuantityChanged { key: VariantKey, quantity: u32 },
    /// A wishlist entry was added (`present: true`) or removed.
    WishlistToggled { key: VariantKey, present: bool },
    /// A wishlist entry moved into the cart in one transition.
    MovedToCart { key: VariantKey, quantity: u32 },
    /// The cart drawer opened.
    CartOpened,
    /// The cart drawer closed.
    CartClosed,
}

/// Read-only view of the store handed to subscribers and readers.
#[derive(Debug, Clone, Copy)]
pub struct StoreView<'a> {
    pub cart: &'a [LineItem],
    pub wishlist: &'a [WishlistEntry],
    pub cart_open: bool,
    pub currency: CurrencyCode,
}

impl StoreView<'_> {
    /// Sum of all cart quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `unit price × quantity` over the cart.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.cart
            .iter()
            .fold(Money::zero(self.currency), |total, item| {
                total.plus(item.line_total(self.currency).amount)
            })
    }

    /// Find a cart entry by key.
    #[must_use]
    pub fn cart_item(&self, key: &VariantKey) -> Option<&LineItem> {
        self.cart.iter().find(|item| item.variant_key() == *key)
    }

    /// Whether the wishlist holds the key.
    #[must_use]
    pub fn wishlist_contains(&self, key: &VariantKey) -> bool {
        self.wishlist.iter().any(|entry| entry.variant_key() == *key)
    }
}
