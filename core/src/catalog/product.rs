// core/src/catalog/product.rs
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl From<u64> for ProductId {
  fn from(id: u64) -> Self {
    ProductId(id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub category: String,
  pub description: String,
  #[serde(rename = "price_cents")]
  pub price: Money,
  /// URI of the product image.
  pub image: String,
}

impl Product {
  /// Case-insensitive containment against name, category and description.
  /// `needle` must already be lower-cased.
  pub(crate) fn mentions(&self, needle: &str) -> bool {
    self.name.to_lowercase().contains(needle)
      || self.category.to_lowercase().contains(needle)
      || self.description.to_lowercase().contains(needle)
  }
}
