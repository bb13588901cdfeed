//! Vitrine Core - Shared domain types.
//!
//! This crate provides the types used across all Vitrine components:
//! - `storefront` - Cart/wishlist store, hero carousel, catalog
//! - `cli` - Command-line driver for inspecting the catalog and replaying sessions
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no timers,
//! no global state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, variant keys, money, line items and catalog records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
