//! Storefront state shared by the pages.
//!
//! One [`Storefront`] is built at startup and passed by reference to every
//! view that needs the catalog, the cart or the notification channel.

use tracing::{debug, info, instrument};
use vitrine_core::ProductId;

use crate::carousel::Carousel;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::notice::Notices;
use crate::store::Store;

/// Notice shown after a quick-add from the product grid.
pub const ADDED_NOTICE: &str = "Added";
/// Notice shown after adding from a product page.
pub const ADDED_TO_BAG_NOTICE: &str = "Added to bag";

/// Catalog, cart store and notices wired together from one configuration.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    store: Store,
    notices: Notices,
}

impl Storefront {
    /// Assemble a storefront from parts.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let store = Store::new(config.currency);
        let notices = Notices::new(config.notice_ttl);
        Self {
            config,
            catalog,
            store,
            notices,
        }
    }

    /// Build a storefront, loading the catalog file if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog cannot be loaded.
    #[instrument(skip_all)]
    pub fn from_config(config: StorefrontConfig) -> crate::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_yaml_file(path)?,
            None => {
                info!("Using built-in catalog");
                Catalog::builtin()
            }
        };
        Ok(Self::new(config, catalog))
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    #[must_use]
    pub const fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Quick-add a grid card. Returns `false` for an unknown card.
    pub fn add_card_to_cart(&mut self, id: &ProductId) -> bool {
        let Some(card) = self.catalog.card(id) else {
            debug!(%id, "Quick-add for unknown card");
            return false;
        };
        self.store.add_to_cart(card.to_cart_product());
        self.notices.post(ADDED_NOTICE);
        true
    }

    /// Add the selected colour and size of a product page.
    ///
    /// Unknown ids resolve to the default product like the page itself.
    /// Returns `false` without touching the cart when the size is out of
    /// stock or the colour index is out of range.
    pub fn add_detail_to_cart(
        &mut self,
        id: &ProductId,
        color_index: usize,
        size: Option<&str>,
    ) -> bool {
        let product = self.catalog.product_or_default(id);
        let Some(selection) = product.to_cart_product(color_index, size) else {
            debug!(%id, color_index, ?size, "Selection not available");
            return false;
        };
        self.store.add_to_cart(selection);
        self.notices.post(ADDED_TO_BAG_NOTICE);
        true
    }

    /// The home page hero using the configured timing.
    #[must_use]
    pub fn hero(&self) -> Carousel {
        Carousel::hero(self.config.carousel)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default(), Catalog::builtin())
    }
}
