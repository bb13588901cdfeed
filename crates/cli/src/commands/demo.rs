//! Scripted cart session.
//!
//! Exercises the store the way a shopper moving through the pages would and
//! prints the resulting drawer.

use tracing::info;
use vitrine_core::ProductId;
use vitrine_storefront::Storefront;
use vitrine_storefront::store::StoreEvent;

/// Replay the session and print the drawer, or its JSON snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be serialized.
#[allow(clippy::print_stdout)]
pub fn run(mut storefront: Storefront, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    storefront.store_mut().subscribe(|event, view| {
        let badge = view.total_quantity();
        match event {
            StoreEvent::ItemAdded { key, quantity } => info!(%key, quantity, badge, "Item added"),
            StoreEvent::ItemRemoved { key } => info!(%key, badge, "Item removed"),
            StoreEvent::QuantityChanged { key, quantity } => {
                info!(%key, quantity, badge, "Quantity changed");
            }
            StoreEvent::WishlistToggled { key, present } => {
                info!(%key, present, "Wishlist toggled");
            }
            StoreEvent::MovedToCart { key, quantity } => {
                info!(%key, quantity, badge, "Moved to cart");
            }
            StoreEvent::CartOpened => info!("Drawer opened"),
            StoreEvent::CartClosed => info!("Drawer closed"),
        }
    });

    script(&mut storefront);

    if json {
        println!("{}", storefront.store().snapshot_json()?);
        return Ok(());
    }

    let store = storefront.store();
    let currency = store.currency();
    println!("Bag ({})", store.total_quantity());
    for item in store.cart_items() {
        let variant = [
            item.product.selected_color.as_deref(),
            item.product.selected_size.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" / ");
        println!(
            "  {} x{} {:>12}  {variant}",
            item.product.name,
            item.quantity,
            item.line_total(currency).display()
        );
    }
    println!("Subtotal {}", store.subtotal().display());
    println!("Wishlist: {} item(s)", store.wishlist_items().len());
    Ok(())
}

fn script(storefront: &mut Storefront) {
    let tee = ProductId::from("1");
    let chinos = ProductId::from("2");
    let hoodie = ProductId::from("1");

    // Home page quick-adds; the second tee merges into the first.
    storefront.add_card_to_cart(&tee);
    storefront.add_card_to_cart(&tee);
    storefront.add_card_to_cart(&chinos);

    // Product page: L is sold out, M goes through.
    storefront.add_detail_to_cart(&hoodie, 0, Some("L"));
    storefront.add_detail_to_cart(&hoodie, 0, Some("M"));

    // Save the jacket for later, then move it to the bag.
    let jacket = storefront
        .catalog()
        .card(&ProductId::from("3"))
        .map(vitrine_core::ProductCard::to_cart_product);
    if let Some(jacket) = jacket {
        let store = storefront.store_mut();
        store.toggle_wishlist(jacket.clone());
        store.move_to_cart_and_open(jacket);
    }

    // Drawer controls.
    let chinos_key = storefront
        .catalog()
        .card(&chinos)
        .map(|card| card.to_cart_product().variant_key());
    if let Some(key) = chinos_key {
        let store = storefront.store_mut();
        store.increment(&key);
        store.decrement(&key);
    }
    storefront.store_mut().close_cart();
}
