//! Unified error type for the storefront services.
//!
//! Cart, wishlist and timer operations are total and never fail. Errors only
//! come from loading configuration and catalogs, building a carousel, or
//! installing the tracing subscriber.

use thiserror::Error;

use crate::carousel::CarouselError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Storefront-level error.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Carousel could not be built.
    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),

    /// A global tracing subscriber was already installed.
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),

    /// Snapshot serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
