// core/src/views/cart_view.rs
use crate::cart::{CartHandle, CartLine, QuantityUpdate};
use crate::catalog::ProductId;
use crate::money::Money;
use crate::notification::Notification;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
  #[serde(flatten)]
  pub line: CartLine,
  pub line_total: Money,
  /// The decrement control is disabled once a line is down to one unit.
  pub can_decrement: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartViewModel {
  pub lines: Vec<CartLineView>,
  pub total_items: u64,
  pub total_price: Money,
  pub is_empty: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FinalizeOutcome {
  /// Nothing to finalize; the panel stays as it is.
  EmptyCart,
  /// Cart cleared; the panel should close.
  Finalized { notification: Notification },
}

/// The cart panel. Holds only a handle; all state lives in the shared cart.
#[derive(Debug, Clone)]
pub struct CartView {
  cart: CartHandle,
}

impl CartView {
  pub fn new(cart: CartHandle) -> Self {
    Self { cart }
  }

  pub fn increment(&self, product_id: ProductId) -> QuantityUpdate {
    self.cart.update(|c| match c.line(product_id).map(|line| line.quantity) {
      Some(current) => c.update_quantity(product_id, current.saturating_add(1)),
      None => QuantityUpdate::NotInCart,
    })
  }

  /// Rejected at one unit: removal goes through [`CartView::remove`].
  pub fn decrement(&self, product_id: ProductId) -> QuantityUpdate {
    self.cart.update(|c| match c.line(product_id).map(|line| line.quantity) {
      Some(current) => c.update_quantity(product_id, current.saturating_sub(1)),
      None => QuantityUpdate::NotInCart,
    })
  }

  pub fn set_quantity(&self, product_id: ProductId, quantity: u32) -> QuantityUpdate {
    self.cart.update(|c| c.update_quantity(product_id, quantity))
  }

  pub fn remove(&self, product_id: ProductId) -> bool {
    self.cart.update(|c| c.remove_from_cart(product_id)).is_some()
  }

  pub fn clear(&self) -> Notification {
    self.cart.update(|c| c.clear_cart());
    Notification::cart_cleared()
  }

  /// No order is submitted anywhere; finalizing only empties the cart.
  pub fn finalize_order(&self) -> FinalizeOutcome {
    self.cart.update(|c| {
      if c.is_empty() {
        debug!("Finalize requested on an empty cart.");
        return FinalizeOutcome::EmptyCart;
      }
      info!(items = c.total_items(), total = %c.total_price(), "Order finalized.");
      c.clear_cart();
      FinalizeOutcome::Finalized {
        notification: Notification::order_finalized(),
      }
    })
  }

  /// Header badge value.
  pub fn badge(&self) -> u64 {
    self.cart.inspect(|c| c.total_items())
  }

  pub fn render(&self) -> CartViewModel {
    self.cart.inspect(|c| CartViewModel {
      lines: c
        .lines()
        .map(|line| CartLineView {
          line_total: line.line_total(),
          can_decrement: line.quantity > 1,
          line: line.clone(),
        })
        .collect(),
      total_items: c.total_items(),
      total_price: c.total_price(),
      is_empty: c.is_empty(),
    })
  }
}
