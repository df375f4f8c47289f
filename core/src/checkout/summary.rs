// core/src/checkout/summary.rs
use crate::cart::{Cart, CartLine};
use crate::money::Money;

const GREETING: &str = "*Esse é o meu pedido!*";

/// Plain-text order message, one block per cart line followed by the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
  text: String,
  total: Money,
}

impl OrderSummary {
  pub fn from_cart(cart: &Cart) -> Self {
    Self::from_lines(cart.lines())
  }

  pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Self {
    let mut text = String::new();
    let mut total = Money::ZERO;

    text.push_str(GREETING);
    text.push('\n');
    for line in lines {
      let line_total = line.line_total();
      text.push_str(&format!(
        "*{}*\n*Quantidade:* {}\n*Valor:* {}\n\n",
        line.name, line.quantity, line_total
      ));
      total = total + line_total;
    }
    text.push_str(&format!("*Total: {}*", total));

    Self { text, total }
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn total(&self) -> Money {
    self.total
  }

  pub fn into_text(self) -> String {
    self.text
  }
}
