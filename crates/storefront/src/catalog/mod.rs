//! Product catalog.
//!
//! The catalog is read-only input: the built-in mock data, or a YAML file
//! with the same shape. Lookup and the navbar search filter live here.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};
use vitrine_core::{Product, ProductCard, ProductId};

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),
    #[error("catalog has no products")]
    Empty,
}

/// Which record a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitKind {
    Product,
    Card,
}

/// A search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub kind: HitKind,
    pub id: ProductId,
    pub name: String,
    pub price_display: String,
}

/// Detail-page products and grid cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    #[serde(default)]
    cards: Vec<ProductCard>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids and an empty product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] or [`CatalogError::DuplicateProduct`].
    pub fn new(products: Vec<Product>, cards: Vec<ProductCard>) -> Result<Self, CatalogError> {
        let catalog = Self { products, cards };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The storefront's mock data.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: builtin::products(),
            cards: builtin::new_arrivals(),
        }
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or fails validation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&yaml)?;
        info!(
            products = catalog.products.len(),
            cards = catalog.cards.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// Look up a detail-page product.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Look up a product, falling back to the first one for unknown ids, as
    /// the detail page does.
    #[must_use]
    pub fn product_or_default(&self, id: &ProductId) -> &Product {
        match self.product(id).or_else(|| self.products.first()) {
            Some(product) => product,
            None => builtin::fallback_product(),
        }
    }

    /// Look up a grid card.
    #[must_use]
    pub fn card(&self, id: &ProductId) -> Option<&ProductCard> {
        self.cards.iter().find(|c| c.id == *id)
    }

    /// Case-insensitive substring match on product and card names.
    ///
    /// Products come first, then cards, each in catalog order. A blank query
    /// matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let products = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(|p| SearchHit {
                kind: HitKind::Product,
                id: p.id.clone(),
                name: p.name.clone(),
                price_display: p.price_display.clone(),
            });
        let cards = self
            .cards
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.variant_label.to_lowercase().contains(&needle)
            })
            .map(|c| SearchHit {
                kind: HitKind::Card,
                id: c.id.clone(),
                name: c.name.clone(),
                price_display: c.price_display.clone(),
            });
        products.chain(cards).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.cards().len(), 5);
        let hoodie = catalog.product(&ProductId::from("1")).unwrap();
        assert_eq!(hoodie.name, "Essential Hoodie");
        assert_eq!(hoodie.colors.len(), 3);
        assert!(!hoodie.is_size_available("L"));
        assert!(hoodie.is_size_available("XL"));
    }

    #[test]
    fn test_unknown_product_falls_back() {
        let catalog = Catalog::builtin();
        assert!(catalog.product(&ProductId::from("missing")).is_none());
        assert_eq!(
            catalog.product_or_default(&ProductId::from("missing")).id,
            ProductId::from("1")
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let hits = catalog.search("ESSENTIAL");
        let names: Vec<_> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Essential Hoodie", "Essential Cotton Tee"]);
        assert_eq!(hits[0].kind, HitKind::Product);
        assert_eq!(hits[1].kind, HitKind::Card);
    }

    #[test]
    fn test_search_matches_variant_label() {
        let hits = Catalog::builtin().search("olive");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Relaxed Fit Chinos");
    }

    #[test]
    fn test_blank_search_matches_nothing() {
        assert!(Catalog::builtin().search("   ").is_empty());
    }

    #[test]
    fn test_yaml_roundtrip_of_builtin() {
        let yaml = serde_yaml::to_string(&Catalog::builtin()).unwrap();
        assert_eq!(Catalog::from_yaml_str(&yaml).unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_yaml_rejects_duplicates() {
        let yaml = r#"
products:
  - id: "7"
    name: Scarf
    price_display: "₦5,000"
  - id: "7"
    name: Other Scarf
    price_display: "₦6,000"
"#;
        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(CatalogError::DuplicateProduct(id)) if id.as_str() == "7"
        ));
    }

    #[test]
    fn test_new_validates() {
        let builtin = Catalog::builtin();
        let catalog = Catalog::new(builtin.products().to_vec(), Vec::new()).unwrap();
        assert!(catalog.cards().is_empty());
        assert_eq!(catalog.products().len(), 1);

        let twice = [builtin.products(), builtin.products()].concat();
        assert!(matches!(
            Catalog::new(twice, Vec::new()),
            Err(CatalogError::DuplicateProduct(id)) if id.as_str() == "1"
        ));
        assert!(matches!(
            Catalog::new(Vec::new(), builtin.cards().to_vec()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_unknown_product_in_custom_catalog_falls_back_to_first() {
        let mut scarf = Catalog::builtin().products()[0].clone();
        scarf.id = ProductId::from("scarf");
        scarf.name = "Merino Scarf".to_owned();
        let catalog = Catalog::new(vec![scarf], Vec::new()).unwrap();
        assert_eq!(
            catalog.product_or_default(&ProductId::from("1")).name,
            "Merino Scarf"
        );
    }

    #[test]
    fn test_yaml_rejects_empty() {
        assert!(matches!(
            Catalog::from_yaml_str("products: []"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Catalog::from_yaml_file("/nonexistent/catalog.yaml"),
            Err(CatalogError::Io { .. })
        ));
    }
}
