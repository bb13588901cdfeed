//! Catalog inspection commands.

use vitrine_core::ProductId;
use vitrine_storefront::Storefront;
use vitrine_storefront::catalog::HitKind;

/// Print every product and card.
#[allow(clippy::print_stdout)]
pub fn list(storefront: &Storefront) {
    let catalog = storefront.catalog();

    println!("Products:");
    for product in catalog.products() {
        println!("  [{}] {} - {}", product.id, product.name, product.price_display);
    }

    println!();
    println!("New Arrivals:");
    for card in catalog.cards() {
        let featured = if card.featured { " *" } else { "" };
        println!(
            "  [{}] {} ({}) - {}{featured}",
            card.id, card.name, card.variant_label, card.price_display
        );
    }
}

/// Print a product the way its detail page lays it out.
#[allow(clippy::print_stdout)]
pub fn product(storefront: &Storefront, id: &str) {
    let product = storefront.catalog().product_or_default(&ProductId::from(id));
    if product.id.as_str() != id {
        tracing::warn!(requested = id, shown = %product.id, "Unknown product, showing default");
    }

    println!("{}", product.breadcrumb.join(" / "));
    println!("{} - {}", product.name, product.price_display);
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }

    println!();
    let colors: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
    println!("Colours: {}", colors.join(", "));
    let sizes: Vec<String> = product
        .sizes
        .iter()
        .map(|s| {
            if s.in_stock {
                s.value.clone()
            } else {
                format!("{} (sold out)", s.value)
            }
        })
        .collect();
    println!("Sizes:   {}", sizes.join(", "));

    for section in &product.sections {
        println!();
        println!("{}", section.title);
        println!("  {}", section.content);
    }
}

/// Print search results.
#[allow(clippy::print_stdout)]
pub fn search(storefront: &Storefront, query: &str) {
    let hits = storefront.catalog().search(query);
    if hits.is_empty() {
        println!("No results for \"{query}\"");
        return;
    }
    for hit in hits {
        let kind = match hit.kind {
            HitKind::Product => "product",
            HitKind::Card => "card",
        };
        println!("  {kind:<8} [{}] {} - {}", hit.id, hit.name, hit.price_display);
    }
}
