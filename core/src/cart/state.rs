// core/src/cart/state.rs
use super::line::CartLine;
use crate::catalog::{Product, ProductId};
use crate::money::Money;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Result of [`Cart::update_quantity`]. Callers log it; none of the variants is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
  Updated { previous: u32, current: u32 },
  /// The requested quantity was below one; the line is untouched.
  Rejected { current: u32 },
  NotInCart,
}

/// Cart lines keyed by product, in the order products were first added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
  lines: IndexMap<ProductId, CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `quantity` units of `product`, merging into an existing line.
  /// A zero quantity changes nothing.
  pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
    if quantity == 0 {
      warn!(product_id = %product.id, "Ignoring add to cart with zero quantity.");
      return;
    }

    match self.lines.get_mut(&product.id) {
      Some(line) => {
        line.quantity = line.quantity.saturating_add(quantity);
        debug!(product_id = %product.id, quantity = line.quantity, "Cart line incremented.");
      }
      None => {
        self.lines.insert(product.id, CartLine::new(product, quantity));
        debug!(product_id = %product.id, quantity, "Cart line created.");
      }
    }
    info!(
      "Added {}x '{}' to cart. Cart now holds {} item(s).",
      quantity,
      product.name,
      self.total_items()
    );
  }

  pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> QuantityUpdate {
    let Some(line) = self.lines.get_mut(&product_id) else {
      debug!(%product_id, "Quantity update for a product not in the cart.");
      return QuantityUpdate::NotInCart;
    };

    if quantity == 0 {
      debug!(%product_id, requested = quantity, current = line.quantity, "Quantity below one rejected.");
      return QuantityUpdate::Rejected { current: line.quantity };
    }

    let previous = line.quantity;
    line.quantity = quantity;
    debug!(%product_id, previous, current = line.quantity, "Cart line quantity set.");
    QuantityUpdate::Updated {
      previous,
      current: line.quantity,
    }
  }

  /// Removes the product's line; returns it if there was one.
  pub fn remove_from_cart(&mut self, product_id: ProductId) -> Option<CartLine> {
    let removed = self.lines.shift_remove(&product_id);
    if removed.is_some() {
      info!(%product_id, "Removed line from cart.");
    }
    removed
  }

  pub fn clear_cart(&mut self) {
    let dropped = self.lines.len();
    self.lines.clear();
    info!(lines = dropped, "Cart cleared.");
  }

  pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLine> {
    self.lines.values()
  }

  pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
    self.lines.get(&product_id)
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn total_items(&self) -> u64 {
    self.lines.values().map(|l| u64::from(l.quantity)).sum()
  }

  pub fn total_price(&self) -> Money {
    self.lines.values().map(CartLine::line_total).sum()
  }
}
