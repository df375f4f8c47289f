// core/src/checkout/mod.rs

//! Checkout hand-off: the cart becomes a text message addressed to the
//! merchant and is sent out through a messaging deep link. Nothing comes back.

pub mod link;
pub mod summary;

pub use link::{DeepLink, Platform};
pub use summary::OrderSummary;

use crate::notification::Notification;
use serde::Serialize;

pub const DEFAULT_MERCHANT_PHONE: &str = "5516996004681";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
  /// Merchant number in any notation; non-digits are stripped when the link is built.
  pub merchant_phone: String,
}

impl Default for CheckoutSettings {
  fn default() -> Self {
    Self {
      merchant_phone: DEFAULT_MERCHANT_PHONE.to_string(),
    }
  }
}

/// What "checkout now" hands back: the link to open and the confirmation to show.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutHandoff {
  pub link: DeepLink,
  pub summary: String,
  pub notification: Notification,
}
