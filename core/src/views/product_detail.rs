// core/src/views/product_detail.rs
use crate::cart::CartHandle;
use crate::catalog::Product;
use crate::checkout::{CheckoutHandoff, CheckoutSettings, DeepLink, OrderSummary, Platform};
use crate::money::Money;
use crate::notification::Notification;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailModel<'a> {
  pub product: &'a Product,
  pub quantity: u32,
  pub can_decrement: bool,
  pub line_total: Money,
}

/// One product with a transient quantity selector (at least one, no upper bound).
#[derive(Debug, Clone)]
pub struct ProductDetail<'a> {
  product: &'a Product,
  quantity: u32,
}

impl<'a> ProductDetail<'a> {
  pub fn new(product: &'a Product) -> Self {
    Self { product, quantity: 1 }
  }

  /// Opens the panel with a preselected quantity; zero is raised to one.
  pub fn with_quantity(product: &'a Product, quantity: u32) -> Self {
    Self {
      product,
      quantity: quantity.max(1),
    }
  }

  pub fn product(&self) -> &'a Product {
    self.product
  }

  pub fn quantity(&self) -> u32 {
    self.quantity
  }

  pub fn increment(&mut self) {
    self.quantity = self.quantity.saturating_add(1);
  }

  pub fn decrement(&mut self) {
    self.quantity = self.quantity.saturating_sub(1).max(1);
  }

  pub fn line_total(&self) -> Money {
    self.product.price.times(self.quantity)
  }

  pub fn add_to_cart(&mut self, cart: &CartHandle) -> Notification {
    let quantity = self.quantity;
    cart.update(|c| c.add_to_cart(self.product, quantity));
    self.quantity = 1;
    Notification::product_added_with_quantity(&self.product.name, quantity)
  }

  /// Adds the selection to the cart, then composes the message for the whole
  /// cart and the deep link that carries it.
  pub fn checkout_now(&mut self, cart: &CartHandle, settings: &CheckoutSettings, platform: Platform) -> CheckoutHandoff {
    let quantity = self.quantity;
    let summary = cart.update(|c| {
      c.add_to_cart(self.product, quantity);
      OrderSummary::from_cart(c)
    });
    let link = DeepLink::compose(platform, &settings.merchant_phone, summary.text());
    self.quantity = 1;

    info!(
      product_id = %self.product.id,
      quantity,
      total = %summary.total(),
      platform = ?platform,
      "Checkout hand-off composed."
    );

    CheckoutHandoff {
      link,
      summary: summary.into_text(),
      notification: Notification::order_sent(),
    }
  }

  pub fn render(&self) -> ProductDetailModel<'a> {
    ProductDetailModel {
      product: self.product,
      quantity: self.quantity,
      can_decrement: self.quantity > 1,
      line_total: self.line_total(),
    }
  }
}
