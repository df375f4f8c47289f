// tests/checkout_tests.rs
mod common;

use common::*;
use storefront::checkout::link::digits_only;
use storefront::{Cart, DeepLink, Money, OrderSummary, Platform};

const IPHONE_UA: &str =
  "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";
const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

#[test]
fn test_money_display_matches_brazilian_currency_format() {
  assert_eq!(Money::from_cents(0).to_string(), "R$\u{a0}0,00");
  assert_eq!(Money::from_cents(7990).to_string(), "R$\u{a0}79,90");
  assert_eq!(Money::from_cents(123456).to_string(), "R$\u{a0}1.234,56");
  assert_eq!(Money::from_cents(100000000).to_string(), "R$\u{a0}1.000.000,00");
}

#[test]
fn test_platform_detection_from_user_agent() {
  assert_eq!(Platform::from_user_agent(Some(IPHONE_UA)), Platform::Mobile);
  assert_eq!(Platform::from_user_agent(Some("Opera Mini/8.0")), Platform::Mobile);
  assert_eq!(Platform::from_user_agent(Some("something ANDROID something")), Platform::Mobile);
  assert_eq!(Platform::from_user_agent(Some(DESKTOP_UA)), Platform::Web);
  assert_eq!(Platform::from_user_agent(None), Platform::Web);
}

#[test]
fn test_phone_is_reduced_to_digits() {
  assert_eq!(digits_only("+55 (16) 99600-4681"), "5516996004681");
}

#[test]
fn test_deep_link_shape_per_platform() {
  let mobile = DeepLink::compose(Platform::Mobile, "+55 16 99600-4681", "Oi!");
  assert_eq!(mobile.url, "whatsapp://send?phone=5516996004681&text=Oi!");

  let web = DeepLink::compose(Platform::Web, "5516996004681", "a b&c");
  assert_eq!(web.url, "https://wa.me/5516996004681?text=a%20b%26c");
}

#[test]
fn test_message_encoding_follows_uri_component_rules() {
  let link = DeepLink::compose(Platform::Web, "1", "*Total:* é\n(ok)~'");
  assert_eq!(link.url, "https://wa.me/1?text=*Total%3A*%20%C3%A9%0A(ok)~'");
}

#[test]
fn test_order_summary_layout() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add_to_cart(&product(1, "Kit Caneca", "Kits", "", 7990), 2);
  cart.add_to_cart(&product(2, "Vela", "Casa", "", 5990), 1);

  let summary = OrderSummary::from_cart(&cart);

  let expected = "*Esse é o meu pedido!*\n\
                  *Kit Caneca*\n*Quantidade:* 2\n*Valor:* R$\u{a0}159,80\n\n\
                  *Vela*\n*Quantidade:* 1\n*Valor:* R$\u{a0}59,90\n\n\
                  *Total: R$\u{a0}219,70*";
  assert_eq!(summary.text(), expected);
  assert_eq!(summary.total(), Money::from_cents(21970));
}
