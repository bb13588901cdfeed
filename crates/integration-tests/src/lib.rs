//! Integration tests for the Vitrine storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_store` - Cart, wishlist and drawer behaviour through the public API
//! - `storefront_carousel` - Hero rotation and timer lifecycle on a paused clock
//! - `storefront_catalog` - Catalog loading, lookup, search and the `Storefront` bundle
//!
//! Nothing here needs a network or a database.

#![cfg_attr(not(test), forbid(unsafe_code))]
