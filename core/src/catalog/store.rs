// core/src/catalog/store.rs
use super::product::{Product, ProductId};
use crate::error::{StorefrontError, StorefrontResult};
use indexmap::IndexSet;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// The ordered, immutable product list. Loaded once, then only read.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  products: Vec<Product>,
}

impl Catalog {
  /// Builds a catalog from already-parsed records, keeping their order.
  pub fn new(products: Vec<Product>) -> StorefrontResult<Self> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
      if !seen.insert(product.id) {
        return Err(StorefrontError::DuplicateProductId { id: product.id });
      }
    }
    Ok(Self { products })
  }

  pub fn from_json(json: &str) -> StorefrontResult<Self> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Self::new(products)
  }

  pub fn from_path(path: impl AsRef<Path>) -> StorefrontResult<Self> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| StorefrontError::CatalogIo {
      path: path.display().to_string(),
      source,
    })?;
    let catalog = Self::from_json(&json)?;
    info!(path = %path.display(), products = catalog.len(), "Catalog loaded from file.");
    Ok(catalog)
  }

  /// The catalog compiled into the crate.
  pub fn bundled() -> StorefrontResult<Self> {
    let catalog = Self::from_json(BUNDLED_CATALOG)?;
    debug!(products = catalog.len(), "Bundled catalog loaded.");
    Ok(catalog)
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  pub fn require(&self, id: ProductId) -> StorefrontResult<&Product> {
    self.get(id).ok_or(StorefrontError::ProductNotFound { id })
  }

  /// Home-page highlight: the first `count` products in catalog order.
  pub fn featured(&self, count: usize) -> &[Product] {
    &self.products[..count.min(self.products.len())]
  }

  /// Distinct categories in order of first appearance.
  pub fn categories(&self) -> IndexSet<&str> {
    self.products.iter().map(|p| p.category.as_str()).collect()
  }
}
