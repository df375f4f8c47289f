// core/src/notification.rs

//! Transient confirmations shown to the shopper after an action.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
  ProductAdded,
  OrderSent,
  CartCleared,
  OrderFinalized,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
  pub kind: NotificationKind,
  pub title: String,
  pub description: String,
  pub shown_at: DateTime<Utc>,
}

impl Notification {
  fn new(kind: NotificationKind, title: &str, description: String) -> Self {
    Self {
      kind,
      title: title.to_string(),
      description,
      shown_at: Utc::now(),
    }
  }

  /// Quick add from a product card, always one unit.
  pub fn product_added(name: &str) -> Self {
    Self::new(
      NotificationKind::ProductAdded,
      "Produto adicionado!",
      format!("{} foi adicionado ao carrinho.", name),
    )
  }

  /// Add from the detail panel, where the shopper picked a quantity.
  pub fn product_added_with_quantity(name: &str, quantity: u32) -> Self {
    Self::new(
      NotificationKind::ProductAdded,
      "Produto adicionado!",
      format!("{}x {} foi adicionado ao carrinho.", quantity, name),
    )
  }

  pub fn order_sent() -> Self {
    Self::new(
      NotificationKind::OrderSent,
      "Pedido enviado!",
      "Seu pedido foi enviado via WhatsApp.".to_string(),
    )
  }

  pub fn cart_cleared() -> Self {
    Self::new(
      NotificationKind::CartCleared,
      "Carrinho limpo",
      "Todos os itens foram removidos do carrinho.".to_string(),
    )
  }

  pub fn order_finalized() -> Self {
    Self::new(
      NotificationKind::OrderFinalized,
      "Pedido finalizado!",
      "Obrigado pela sua compra. Em breve você receberá os detalhes do pedido.".to_string(),
    )
  }
}
