//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod catalog;
pub mod id;
pub mod line_item;
pub mod price;
pub mod variant;

pub use catalog::{ColorVariant, InfoSection, Product, ProductCard, SizeOption};
pub use id::ProductId;
pub use line_item::{CartProduct, LineItem, WishlistEntry};
pub use price::{CurrencyCode, Money, parse_money};
pub use variant::VariantKey;
