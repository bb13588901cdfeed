//! Built-in mock catalog.

use std::sync::LazyLock;

use vitrine_core::{ColorVariant, InfoSection, Product, ProductCard, ProductId, SizeOption};

static FALLBACK: LazyLock<Product> = LazyLock::new(essential_hoodie);

/// Served when a catalog somehow has no products at all.
pub(super) fn fallback_product() -> &'static Product {
    &FALLBACK
}

pub(super) fn products() -> Vec<Product> {
    vec![essential_hoodie()]
}

fn color(name: &str, swatch: &str, images: &[&str]) -> ColorVariant {
    ColorVariant {
        name: name.to_owned(),
        swatch: swatch.to_owned(),
        images: images.iter().map(|s| (*s).to_owned()).collect(),
    }
}

fn size(value: &str, in_stock: bool) -> SizeOption {
    SizeOption {
        value: value.to_owned(),
        in_stock,
    }
}

fn section(title: &str, content: &str) -> InfoSection {
    InfoSection {
        title: title.to_owned(),
        content: content.to_owned(),
    }
}

fn essential_hoodie() -> Product {
    Product {
        id: ProductId::from("1"),
        name: "Essential Hoodie".to_owned(),
        slug: "essential-hoodie".to_owned(),
        price_display: "₦28,500".to_owned(),
        description: "A premium heavyweight hoodie crafted from brushed organic cotton. \
                      Relaxed fit with kangaroo pocket and ribbed cuffs."
            .to_owned(),
        breadcrumb: ["Home", "Men", "Outerwear", "Essential Hoodie"]
            .map(str::to_owned)
            .to_vec(),
        colors: vec![
            color(
                "Black",
                "#111827",
                &[
                    "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=800&q=80",
                    "https://images.unsplash.com/photo-1578768079052-aa76e52f2d7c?w=800&q=80",
                    "https://images.unsplash.com/photo-1556821840-2a78f4aef85d?w=800&q=80",
                    "https://images.unsplash.com/photo-1618354691373-d851c5c3a990?w=800&q=80",
                ],
            ),
            color(
                "Heather Gray",
                "#6B7280",
                &[
                    "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?w=800&q=80",
                    "https://images.unsplash.com/photo-1620799140188-3b2a02fd9a77?w=800&q=80",
                    "https://images.unsplash.com/photo-1576566588028-4147f3842f27?w=800&q=80",
                    "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?w=800&q=80",
                ],
            ),
            color(
                "Navy",
                "#1E3A5F",
                &[
                    "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=800&q=80",
                    "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&q=80",
                    "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=800&q=80",
                    "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=800&q=80",
                ],
            ),
        ],
        sizes: vec![
            size("S", true),
            size("M", true),
            size("L", false),
            size("XL", true),
            size("XXL", true),
        ],
        sections: vec![
            section(
                "Product Details",
                "100% organic cotton. Brushed fleece interior. Relaxed fit. Kangaroo pocket. \
                 Ribbed cuffs and hem. Unisex sizing.",
            ),
            section(
                "Shipping",
                "Free standard shipping on orders over ₦15,000. Express delivery available. \
                 Delivery within 5–7 business days in Nigeria.",
            ),
            section(
                "Returns",
                "30-day hassle-free returns. Items must be unworn with tags attached. \
                 Contact support to initiate a return.",
            ),
        ],
    }
}

fn card(
    id: &str,
    name: &str,
    variant_label: &str,
    price_display: &str,
    images: (&str, &str),
    featured: bool,
) -> ProductCard {
    ProductCard {
        id: ProductId::from(id),
        name: name.to_owned(),
        variant_label: variant_label.to_owned(),
        price_display: price_display.to_owned(),
        image_primary: images.0.to_owned(),
        image_secondary: images.1.to_owned(),
        featured,
    }
}

/// The home page "New Arrivals" grid.
pub(super) fn new_arrivals() -> Vec<ProductCard> {
    vec![
        card(
            "1",
            "Essential Cotton Tee",
            "Navy",
            "₦12,500",
            (
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&q=80",
                "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=800&q=80",
            ),
            true,
        ),
        card(
            "2",
            "Relaxed Fit Chinos",
            "Olive",
            "₦18,900",
            (
                "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=600&q=80",
                "https://images.unsplash.com/photo-1594938298603-c8148c4dae35?w=600&q=80",
            ),
            false,
        ),
        card(
            "3",
            "Classic Denim Jacket",
            "Indigo",
            "₦32,000",
            (
                "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=600&q=80",
                "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?w=600&q=80",
            ),
            false,
        ),
        card(
            "4",
            "Wool Blend Blazer",
            "Charcoal",
            "₦45,000",
            (
                "https://images.unsplash.com/photo-1507679799987-c73779587ccf?w=600&q=80",
                "https://images.unsplash.com/photo-1594938298603-c8148c4dae35?w=600&q=80",
            ),
            false,
        ),
        card(
            "5",
            "Linen Shirt",
            "Sand",
            "₦15,200",
            (
                "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=600&q=80",
                "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=600&q=80",
            ),
            false,
        ),
    ]
}
