// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use storefront::{Catalog, CheckoutSettings, Money, Product, ProductId};
use tracing::Level;

// --- Common Fixtures ---
pub fn product(id: u64, name: &str, category: &str, description: &str, price_cents: u64) -> Product {
  Product {
    id: ProductId(id),
    name: name.to_string(),
    category: category.to_string(),
    description: description.to_string(),
    price: Money::from_cents(price_cents),
    image: format!("https://img.test/{}.jpg", id),
  }
}

/// Two products, prices 10 and 20.
pub fn product_a() -> Product {
  product(1, "Alpha Mug", "X", "Ceramic mug", 10)
}

pub fn product_b() -> Product {
  product(2, "Beta Candle", "Y", "Lavender scented candle", 20)
}

pub fn gift_catalog() -> Catalog {
  Catalog::new(vec![
    product(1, "Kit Caneca", "Kits Presente", "Caneca com chocolate belga", 7990),
    product(2, "Vela Lavanda", "Casa", "Vela aromática de lavanda", 5990),
    product(3, "Colar Dourado", "Acessórios", "Colar banhado a ouro", 12900),
    product(4, "Cesta Café", "Kits Presente", "Cesta com geleias e café", 18990),
    product(5, "Difusor Bambu", "Casa", "Difusor com varetas", 8990),
  ])
  .expect("fixture catalog has unique ids")
}

pub fn test_settings() -> CheckoutSettings {
  CheckoutSettings {
    merchant_phone: "+55 (16) 99600-4681".to_string(),
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
