// core/src/cart/line.rs
use crate::catalog::{Product, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A product in the cart. Product fields are copied when the line is created
/// and never refreshed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
  pub product_id: ProductId,
  pub name: String,
  pub unit_price: Money,
  pub category: String,
  pub image: String,
  pub quantity: u32,
  pub added_at: DateTime<Utc>,
}

impl CartLine {
  pub(crate) fn new(product: &Product, quantity: u32) -> Self {
    Self {
      product_id: product.id,
      name: product.name.clone(),
      unit_price: product.price,
      category: product.category.clone(),
      image: product.image.clone(),
      quantity,
      added_at: Utc::now(),
    }
  }

  pub fn line_total(&self) -> Money {
    self.unit_price.times(self.quantity)
  }
}
