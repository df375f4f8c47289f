// tests/views_tests.rs
mod common;

use common::*;
use storefront::{
  CartHandle, CartView, CatalogView, CategoryFilter, FinalizeOutcome, Money, NotificationKind, Platform,
  ProductDetail, ProductId, QuantityUpdate, ALL_CATEGORIES_LABEL,
};

// --- Catalog View ---

#[test]
fn test_catalog_view_renders_categories_and_results_label() {
  setup_tracing();
  let catalog = gift_catalog();
  let mut view = CatalogView::new(&catalog);

  let model = view.render();
  assert_eq!(
    model.categories,
    vec![ALL_CATEGORIES_LABEL, "Kits Presente", "Casa", "Acessórios"]
  );
  assert_eq!(model.selected_category, ALL_CATEGORIES_LABEL);
  assert_eq!(model.results_label, "5 produtos encontrados");

  view.set_query("colar");
  let model = view.render();
  assert_eq!(model.results_label, "1 produto encontrado");
  assert_eq!(model.products[0].id, ProductId(3));

  view.select_category(CategoryFilter::Named("Casa".to_string()));
  let model = view.render();
  assert!(model.is_empty);
  assert_eq!(model.results_label, "0 produtos encontrados");

  view.reset_filters();
  assert_eq!(view.visible_products().len(), 5);
}

#[test]
fn test_catalog_quick_add_adds_one_unit() {
  setup_tracing();
  let catalog = gift_catalog();
  let view = CatalogView::new(&catalog);
  let cart = CartHandle::default();
  let vela = catalog.require(ProductId(2)).expect("fixture product");

  let notification = view.add_to_cart(&cart, vela);
  view.add_to_cart(&cart, vela);

  assert_eq!(notification.kind, NotificationKind::ProductAdded);
  assert_eq!(notification.description, "Vela Lavanda foi adicionado ao carrinho.");
  assert_eq!(cart.read().line(ProductId(2)).map(|l| l.quantity), Some(2));
}

// --- Product Detail ---

#[test]
fn test_detail_selector_floor_is_one() {
  let a = product_a();
  let mut detail = ProductDetail::new(&a);
  detail.decrement();
  assert_eq!(detail.quantity(), 1);
  assert!(!detail.render().can_decrement);

  detail.increment();
  detail.increment();
  assert_eq!(detail.quantity(), 3);
  assert_eq!(detail.line_total(), Money::from_cents(30));
  assert!(detail.render().can_decrement);

  assert_eq!(ProductDetail::with_quantity(&a, 0).quantity(), 1);
}

#[test]
fn test_detail_add_to_cart_resets_selector() {
  setup_tracing();
  let a = product_a();
  let cart = CartHandle::default();
  let mut detail = ProductDetail::with_quantity(&a, 4);

  let notification = detail.add_to_cart(&cart);

  assert_eq!(notification.description, "4x Alpha Mug foi adicionado ao carrinho.");
  assert_eq!(detail.quantity(), 1);
  assert_eq!(cart.read().total_items(), 4);
}

#[test]
fn test_checkout_now_adds_then_summarizes_whole_cart() {
  setup_tracing();
  let (a, b) = (product_a(), product_b());
  let cart = CartHandle::default();
  cart.update(|c| c.add_to_cart(&a, 1));

  let mut detail = ProductDetail::with_quantity(&b, 2);
  let handoff = detail.checkout_now(&cart, &test_settings(), Platform::Mobile);

  assert_eq!(detail.quantity(), 1);
  assert_eq!(cart.read().total_items(), 3);
  assert!(handoff.summary.contains("*Alpha Mug*\n*Quantidade:* 1"));
  assert!(handoff.summary.contains("*Beta Candle*\n*Quantidade:* 2"));
  assert!(handoff.summary.ends_with("*Total: R$\u{a0}0,50*"));
  assert!(handoff.link.url.starts_with("whatsapp://send?phone=5516996004681&text="));
  assert_eq!(handoff.link.platform, Platform::Mobile);
  assert_eq!(handoff.notification.kind, NotificationKind::OrderSent);
}

#[test]
fn test_checkout_now_for_product_already_in_cart_lists_it_once() {
  setup_tracing();
  let a = product_a();
  let cart = CartHandle::default();
  cart.update(|c| c.add_to_cart(&a, 1));

  let handoff = ProductDetail::new(&a).checkout_now(&cart, &test_settings(), Platform::Web);

  assert_eq!(handoff.summary.matches("*Alpha Mug*").count(), 1);
  assert!(handoff.summary.contains("*Quantidade:* 2"));
  assert!(handoff.link.url.starts_with("https://wa.me/5516996004681?text="));
}

// --- Cart View ---

#[test]
fn test_cart_view_decrement_is_blocked_at_one() {
  setup_tracing();
  let cart = CartHandle::default();
  cart.update(|c| c.add_to_cart(&product_a(), 2));
  let view = CartView::new(cart.clone());

  assert_eq!(
    view.decrement(ProductId(1)),
    QuantityUpdate::Updated { previous: 2, current: 1 }
  );
  assert_eq!(view.decrement(ProductId(1)), QuantityUpdate::Rejected { current: 1 });
  assert!(!view.render().lines[0].can_decrement);
  assert_eq!(view.render().lines.len(), 1);

  assert_eq!(
    view.increment(ProductId(1)),
    QuantityUpdate::Updated { previous: 1, current: 2 }
  );
  assert_eq!(view.increment(ProductId(42)), QuantityUpdate::NotInCart);
}

#[test]
fn test_cart_view_render_totals() {
  setup_tracing();
  let cart = CartHandle::default();
  cart.update(|c| {
    c.add_to_cart(&product_a(), 1);
    c.add_to_cart(&product_b(), 2);
    c.add_to_cart(&product_a(), 1);
  });
  let view = CartView::new(cart);

  let model = view.render();
  assert_eq!(model.total_items, 4);
  assert_eq!(model.total_price, Money::from_cents(60));
  assert_eq!(model.lines[0].line_total, Money::from_cents(20));
  assert_eq!(model.lines[1].line_total, Money::from_cents(40));
  assert_eq!(view.badge(), 4);
}

#[test]
fn test_cart_view_remove_and_clear() {
  setup_tracing();
  let cart = CartHandle::default();
  cart.update(|c| {
    c.add_to_cart(&product_a(), 1);
    c.add_to_cart(&product_b(), 1);
  });
  let view = CartView::new(cart.clone());

  assert!(view.remove(ProductId(1)));
  assert!(!view.remove(ProductId(1)));
  assert_eq!(cart.read().len(), 1);

  let notification = view.clear();
  assert_eq!(notification.kind, NotificationKind::CartCleared);
  let model = view.render();
  assert!(model.is_empty);
  assert_eq!(model.total_price, Money::ZERO);
}

#[test]
fn test_finalize_order_clears_non_empty_cart_only() {
  setup_tracing();
  let cart = CartHandle::default();
  let view = CartView::new(cart.clone());

  assert!(matches!(view.finalize_order(), FinalizeOutcome::EmptyCart));

  cart.update(|c| c.add_to_cart(&product_b(), 3));
  match view.finalize_order() {
    FinalizeOutcome::Finalized { notification } => {
      assert_eq!(notification.kind, NotificationKind::OrderFinalized);
      assert_eq!(notification.title, "Pedido finalizado!");
    }
    other => panic!("expected a finalized order, got {:?}", other),
  }
  assert!(cart.read().is_empty());
}
