//! Cart and wishlist store.
//!
//! The store is the single source of truth for the cart drawer, the navbar
//! badge, the wishlist page and the product pages. It is constructed once and
//! handed by reference to whatever needs it; there is no global instance.
//!
//! # Policy
//!
//! Adding a configuration that is already in the cart merges: the existing
//! entry's quantity goes up by one and the incoming attributes are dropped.
//!
//! # Confinement
//!
//! Every operation runs to completion synchronously and notifies subscribers
//! before returning. Subscribers are not `Send`, so the store stays on the
//! thread that owns it. Sharing it across threads would need a lock around
//! the collections and the notification pass.

mod events;

use serde::Serialize;
use tracing::debug;
use vitrine_core::{CartProduct, CurrencyCode, LineItem, Money, VariantKey, WishlistEntry};

pub use events::{StoreEvent, StoreView};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreEvent, &StoreView<'_>)>;

/// Owned copy of the store contents, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub currency: CurrencyCode,
    pub cart: Vec<LineItem>,
    pub wishlist: Vec<WishlistEntry>,
    pub total_quantity: u64,
    pub subtotal: Money,
}

/// Cart, wishlist and drawer state.
pub struct Store {
    cart: Vec<LineItem>,
    wishlist: Vec<WishlistEntry>,
    cart_open: bool,
    currency: CurrencyCode,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("cart_open", &self.cart_open)
            .field("currency", &self.currency)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Store {
    /// Create an empty store pricing in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            cart: Vec::new(),
            wishlist: Vec::new(),
            cart_open: false,
            currency,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Currency used for totals.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Borrow the current state.
    #[must_use]
    pub fn view(&self) -> StoreView<'_> {
        StoreView {
            cart: &self.cart,
            wishlist: &self.wishlist,
            cart_open: self.cart_open,
            currency: self.currency,
        }
    }

    /// Cart entries in insertion order.
    #[must_use]
    pub fn cart_items(&self) -> &[LineItem] {
        &self.cart
    }

    /// Wishlist entries in insertion order.
    #[must_use]
    pub fn wishlist_items(&self) -> &[WishlistEntry] {
        &self.wishlist
    }

    /// Owned copy of the store contents.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let view = self.view();
        StoreSnapshot {
            currency: self.currency,
            cart: self.cart.clone(),
            wishlist: self.wishlist.clone(),
            total_quantity: view.total_quantity(),
            subtotal: view.subtotal(),
        }
    }

    /// Serialize [`Store::snapshot`] as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Serialization`](crate::StorefrontError::Serialization)
    /// if serialization fails.
    pub fn snapshot_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    // =========================================================================
    // Subscribers
    // =========================================================================

    /// Register a callback invoked after every state change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &StoreView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }

    fn emit(&mut self, event: &StoreEvent) {
        let view = StoreView {
            cart: &self.cart,
            wishlist: &self.wishlist,
            cart_open: self.cart_open,
            currency: self.currency,
        };
        for (_, callback) in &mut self.subscribers {
            callback(event, &view);
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    fn position(&self, key: &VariantKey) -> Option<usize> {
        self.cart.iter().position(|item| item.variant_key() == *key)
    }

    /// Merge without notifying. Returns the resulting quantity and whether
    /// it changed; an entry already at `u32::MAX` stays put.
    fn merge_into_cart(&mut self, product: CartProduct) -> (u32, bool) {
        let key = product.variant_key();
        if let Some(item) = self.cart.iter_mut().find(|item| item.variant_key() == key) {
            let before = item.quantity;
            item.quantity = before.saturating_add(1);
            (item.quantity, item.quantity != before)
        } else {
            self.cart.push(LineItem::new(product));
            (1, true)
        }
    }

    /// Add one unit of `product`.
    ///
    /// If the configuration is already in the cart its quantity goes up by
    /// one; otherwise a new entry with quantity 1 is appended. Returns the
    /// entry's quantity after the add.
    pub fn add_to_cart(&mut self, product: CartProduct) -> u32 {
        let key = product.variant_key();
        let (quantity, changed) = self.merge_into_cart(product);
        if changed {
            debug!(%key, quantity, "Added to cart");
            self.emit(&StoreEvent::ItemAdded { key, quantity });
        }
        quantity
    }

    /// Remove the entry with `key`. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, key: &VariantKey) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };
        self.cart.remove(index);
        debug!(%key, "Removed from cart");
        self.emit(&StoreEvent::ItemRemoved { key: key.clone() });
        true
    }

    /// Set the quantity of an existing entry.
    ///
    /// A quantity of zero or less removes the entry. Never creates an entry.
    /// Returns whether the key was in the cart.
    pub fn update_quantity(&mut self, key: &VariantKey, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(key);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let Some(item) = self.cart.iter_mut().find(|item| item.variant_key() == *key) else {
            return false;
        };
        if item.quantity == quantity {
            return true;
        }
        item.quantity = quantity;
        debug!(%key, quantity, "Updated cart quantity");
        self.emit(&StoreEvent::QuantityChanged {
            key: key.clone(),
            quantity,
        });
        true
    }

    /// Drawer `+` button.
    pub fn increment(&mut self, key: &VariantKey) -> bool {
        let Some(current) = self.cart_item(key).map(|item| item.quantity) else {
            return false;
        };
        self.update_quantity(key, i64::from(current) + 1)
    }

    /// Drawer `−` button. Decrementing a single unit removes the entry.
    pub fn decrement(&mut self, key: &VariantKey) -> bool {
        let Some(current) = self.cart_item(key).map(|item| item.quantity) else {
            return false;
        };
        self.update_quantity(key, i64::from(current) - 1)
    }

    /// Find a cart entry by key.
    #[must_use]
    pub fn cart_item(&self, key: &VariantKey) -> Option<&LineItem> {
        self.cart.iter().find(|item| item.variant_key() == *key)
    }

    /// Sum of all quantities in the cart.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.view().total_quantity()
    }

    /// Sum of `unit price × quantity` over the cart.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.view().subtotal()
    }

    /// `unit price × quantity` for one entry.
    #[must_use]
    pub fn line_total(&self, key: &VariantKey) -> Option<Money> {
        self.cart_item(key).map(|item| item.line_total(self.currency))
    }

    // =========================================================================
    // Drawer
    // =========================================================================

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Open the cart drawer.
    pub fn open_cart(&mut self) {
        if !self.cart_open {
            self.cart_open = true;
            self.emit(&StoreEvent::CartOpened);
        }
    }

    /// Close the cart drawer.
    pub fn close_cart(&mut self) {
        if self.cart_open {
            self.cart_open = false;
            self.emit(&StoreEvent::CartClosed);
        }
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Add `product` to the wishlist, or remove it if already there.
    ///
    /// Returns whether the configuration is in the wishlist afterwards.
    pub fn toggle_wishlist(&mut self, product: CartProduct) -> bool {
        let key = product.variant_key();
        let existing = self.wishlist.iter().position(|e| e.variant_key() == key);
        let present = if let Some(index) = existing {
            self.wishlist.remove(index);
            false
        } else {
            self.wishlist.push(product);
            true
        };
        debug!(%key, present, "Toggled wishlist");
        self.emit(&StoreEvent::WishlistToggled { key, present });
        present
    }

    /// Membership test by variant key.
    #[must_use]
    pub fn is_in_wishlist(&self, product: &CartProduct) -> bool {
        self.view().wishlist_contains(&product.variant_key())
    }

    /// Add `product` to the cart and drop it from the wishlist.
    ///
    /// Subscribers see a single [`StoreEvent::MovedToCart`] with both changes
    /// already applied. Returns the cart quantity after the move.
    pub fn move_to_cart(&mut self, product: CartProduct) -> u32 {
        self.move_into_cart(product, false)
    }

    /// [`Store::move_to_cart`] that also opens the drawer, as the wishlist
    /// page does. Still a single notification.
    pub fn move_to_cart_and_open(&mut self, product: CartProduct) -> u32 {
        self.move_into_cart(product, true)
    }

    fn move_into_cart(&mut self, product: CartProduct, open: bool) -> u32 {
        let key = product.variant_key();
        let (quantity, added) = self.merge_into_cart(product);
        let wishlisted = self.wishlist.len();
        self.wishlist.retain(|entry| entry.variant_key() != key);
        let opened = open && !self.cart_open;
        self.cart_open |= open;

        if added || opened || self.wishlist.len() != wishlisted {
            debug!(%key, quantity, "Moved wishlist entry to cart");
            self.emit(&StoreEvent::MovedToCart { key, quantity });
        }
        quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rust_decimal::Decimal;

    use super::*;

    fn tee() -> CartProduct {
        CartProduct::new("1", "Essential Cotton Tee", "₦12,500", "tee.jpg")
    }

    fn chinos() -> CartProduct {
        CartProduct::new("2", "Relaxed Fit Chinos", "₦18,900", "chinos.jpg")
    }

    fn hoodie(color: &str, size: &str) -> CartProduct {
        CartProduct::new("h", "Essential Hoodie", "₦28,500", "hoodie.jpg")
            .with_color(color)
            .with_size(size)
    }

    #[test]
    fn test_distinct_adds_each_have_quantity_one() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        store.add_to_cart(chinos());
        store.add_to_cart(hoodie("Black", "M"));
        store.add_to_cart(hoodie("Black", "L"));

        assert_eq!(store.total_quantity(), 4);
        assert!(store.cart_items().iter().all(|item| item.quantity == 1));
    }

    #[test]
    fn test_duplicate_add_merges() {
        let mut store = Store::default();
        assert_eq!(store.add_to_cart(tee()), 1);
        assert_eq!(store.add_to_cart(tee()), 2);

        assert_eq!(store.cart_items().len(), 1);
        assert_eq!(store.cart_items()[0].quantity, 2);
    }

    #[test]
    fn test_merge_discards_incoming_attributes() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        let mut renamed = tee();
        renamed.name = "Renamed".to_string();
        renamed.price_display = "₦1".to_string();
        store.add_to_cart(renamed);

        assert_eq!(store.cart_items()[0].product.name, "Essential Cotton Tee");
        assert_eq!(store.subtotal().amount, Decimal::from(25_000));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut store = Store::default();
        store.add_to_cart(chinos());
        store.add_to_cart(tee());
        store.add_to_cart(chinos());

        let ids: Vec<_> = store
            .cart_items()
            .iter()
            .map(|item| item.product.product_id.as_str())
            .collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let mut a = Store::default();
        let mut b = Store::default();
        for store in [&mut a, &mut b] {
            store.add_to_cart(tee());
            store.add_to_cart(tee());
            store.add_to_cart(chinos());
        }
        let key = tee().variant_key();

        assert!(a.update_quantity(&key, 0));
        assert!(b.remove_from_cart(&key));

        assert_eq!(a.cart_items(), b.cart_items());
        assert_eq!(a.total_quantity(), 1);
    }

    #[test]
    fn test_negative_quantity_removes() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        assert!(store.update_quantity(&tee().variant_key(), -3));
        assert!(store.cart_items().is_empty());
    }

    #[test]
    fn test_update_never_creates() {
        let mut store = Store::default();
        assert!(!store.update_quantity(&tee().variant_key(), 5));
        assert!(store.cart_items().is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        assert!(!store.remove_from_cart(&chinos().variant_key()));
        assert_eq!(store.total_quantity(), 1);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        let key = tee().variant_key();

        assert!(store.increment(&key));
        assert_eq!(store.cart_item(&key).unwrap().quantity, 2);
        assert!(store.decrement(&key));
        assert!(store.decrement(&key));
        assert!(store.cart_item(&key).is_none());
        assert!(!store.decrement(&key));
    }

    #[test]
    fn test_subtotal_uses_parsed_prices() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        store.add_to_cart(tee());
        store.add_to_cart(chinos());

        assert_eq!(store.subtotal().amount, Decimal::from(43_900));
        assert_eq!(store.subtotal().display(), "₦43,900");
        assert_eq!(
            store.line_total(&tee().variant_key()).unwrap().amount,
            Decimal::from(25_000)
        );
    }

    #[test]
    fn test_malformed_price_counts_as_zero() {
        let mut store = Store::default();
        store.add_to_cart(CartProduct::new("gift", "Gift wrap", "free", ""));
        store.add_to_cart(chinos());
        assert_eq!(store.subtotal().amount, Decimal::from(18_900));
        assert_eq!(store.total_quantity(), 2);
    }

    #[test]
    fn test_toggle_wishlist_twice_restores() {
        let mut store = Store::default();
        store.toggle_wishlist(chinos());
        let before = store.wishlist_items().to_vec();

        assert!(store.toggle_wishlist(tee()));
        assert!(store.is_in_wishlist(&tee()));
        assert!(!store.toggle_wishlist(tee()));

        assert_eq!(store.wishlist_items(), before.as_slice());
    }

    #[test]
    fn test_wishlist_identity_is_variant_key() {
        let mut store = Store::default();
        store.toggle_wishlist(hoodie("Black", "M"));
        assert!(store.is_in_wishlist(&hoodie("Black", "M")));
        assert!(!store.is_in_wishlist(&hoodie("Navy", "M")));
    }

    #[test]
    fn test_move_to_cart_is_one_transition() {
        let mut store = Store::default();
        store.toggle_wishlist(tee());

        let seen: Rc<RefCell<Vec<(StoreEvent, bool, bool)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let key = tee().variant_key();
        let probe = key.clone();
        store.subscribe(move |event, view| {
            sink.borrow_mut().push((
                event.clone(),
                view.cart_item(&probe).is_some(),
                view.wishlist_contains(&probe),
            ));
        });

        assert_eq!(store.move_to_cart(tee()), 1);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0],
            (StoreEvent::MovedToCart { key, quantity: 1 }, true, false)
        );
        assert!(store.wishlist_items().is_empty());
    }

    #[test]
    fn test_move_to_cart_and_open() {
        let mut store = Store::default();
        store.toggle_wishlist(tee());
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        store.subscribe(move |_, view| {
            assert!(view.cart_open);
            *sink.borrow_mut() += 1;
        });

        store.move_to_cart_and_open(tee());
        assert!(store.is_cart_open());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_subscribers_see_final_state() {
        let mut store = Store::default();
        let totals: Rc<RefCell<Vec<u64>>> = Rc::default();
        let sink = Rc::clone(&totals);
        store.subscribe(move |_, view| sink.borrow_mut().push(view.total_quantity()));

        store.add_to_cart(tee());
        store.add_to_cart(tee());
        store.update_quantity(&tee().variant_key(), 5);
        store.remove_from_cart(&tee().variant_key());

        assert_eq!(*totals.borrow(), vec![1, 2, 5, 0]);
    }

    #[test]
    fn test_noops_do_not_notify() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store.remove_from_cart(&chinos().variant_key());
        store.update_quantity(&chinos().variant_key(), 3);
        store.update_quantity(&tee().variant_key(), 1);
        store.close_cart();

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_add_at_max_quantity_does_not_notify() {
        let mut store = Store::default();
        let key = tee().variant_key();
        store.add_to_cart(tee());
        store.update_quantity(&key, i64::from(u32::MAX));
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        assert_eq!(store.add_to_cart(tee()), u32::MAX);
        assert_eq!(store.move_to_cart(tee()), u32::MAX);
        assert_eq!(*count.borrow(), 0);

        store.toggle_wishlist(tee());
        store.move_to_cart(tee());
        assert_eq!(*count.borrow(), 2);
        assert!(store.wishlist_items().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = Store::default();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store.add_to_cart(tee());
        store.unsubscribe(id);
        store.add_to_cart(tee());

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_drawer_events() {
        let mut store = Store::default();
        let events: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
        let sink = Rc::clone(&events);
        store.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        store.open_cart();
        store.open_cart();
        store.close_cart();

        assert_eq!(
            *events.borrow(),
            vec![StoreEvent::CartOpened, StoreEvent::CartClosed]
        );
    }

    #[test]
    fn test_snapshot_json() {
        let mut store = Store::default();
        store.add_to_cart(tee());
        store.toggle_wishlist(chinos());

        let json: serde_json::Value =
            serde_json::from_str(&store.snapshot_json().unwrap()).unwrap();
        assert_eq!(json["total_quantity"], 1);
        assert_eq!(json["cart"][0]["name"], "Essential Cotton Tee");
        assert_eq!(json["wishlist"][0]["product_id"], "2");
        assert_eq!(json["subtotal"]["amount"], "12500");
    }
}
