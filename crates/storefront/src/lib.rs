//! Vitrine storefront services.
//!
//! The stateful half of the storefront, kept free of any UI so it can be
//! driven from a CLI, tests, or a rendering layer:
//!
//! - [`store`]: cart, wishlist and drawer state with change subscribers
//! - [`carousel`]: the hero slide rotation and its periodic timer
//! - [`notice`]: transient "Added to bag" notifications
//! - [`catalog`]: product lookup and search
//! - [`state`]: everything above wired together from [`config`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notice;
pub mod state;
pub mod store;
pub mod telemetry;

pub use error::{Result, StorefrontError};
pub use state::Storefront;
