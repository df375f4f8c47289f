// app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use storefront::{CartView, FinalizeOutcome, ProductDetail, ProductId, QuantityUpdate};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::ShopperSession;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub product_id: u64,
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityPayload {
  pub quantity: i64,
}

/// Quantities coming from clients must be at least one before they reach the cart.
pub(crate) fn validated_quantity(quantity: Option<i64>) -> Result<u32, AppError> {
  let quantity = quantity.unwrap_or(1);
  if quantity < 1 {
    warn!("Invalid quantity ({}) provided. Must be positive.", quantity);
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }
  u32::try_from(quantity).map_err(|_| AppError::Validation("Quantity is too large.".to_string()))
}

/// Like [`validated_quantity`], but anything below one maps to zero, which the
/// cart ignores instead of reporting.
pub(crate) fn requested_line_quantity(quantity: i64) -> Result<u32, AppError> {
  if quantity < 1 {
    return Ok(0);
  }
  u32::try_from(quantity).map_err(|_| {
    warn!("Quantity ({}) exceeds the supported maximum.", quantity);
    AppError::Validation("Quantity is too large.".to_string())
  })
}

fn log_update(session: &ShopperSession, product_id: ProductId, outcome: QuantityUpdate) {
  match outcome {
    QuantityUpdate::Updated { previous, current } => info!(
      "Session {}: product {} quantity {} -> {}.",
      session.session_id, product_id, previous, current
    ),
    QuantityUpdate::Rejected { current } => info!(
      "Session {}: quantity change for product {} ignored, stays at {}.",
      session.session_id, product_id, current
    ),
    QuantityUpdate::NotInCart => info!(
      "Session {}: product {} is not in the cart.",
      session.session_id, product_id
    ),
  }
}

// --- Handler Implementations ---

#[instrument(name = "handler::view_cart", skip(session), fields(session_id = %session.session_id))]
pub async fn view_cart_handler(session: ShopperSession) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(CartView::new(session.cart).render()))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, session),
    fields(session_id = %session.session_id, product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  session: ShopperSession,
) -> Result<HttpResponse, AppError> {
  let quantity = validated_quantity(req_payload.quantity)?;
  let product = app_state.catalog.require(ProductId(req_payload.product_id))?;

  let notification = ProductDetail::with_quantity(product, quantity).add_to_cart(&session.cart);
  let cart_view = CartView::new(session.cart);

  Ok(HttpResponse::Ok().json(json!({
      "notification": notification,
      "cart": cart_view.render()
  })))
}

#[instrument(name = "handler::update_quantity", skip(path, req_payload, session), fields(session_id = %session.session_id))]
pub async fn update_quantity_handler(
  path: web::Path<u64>,
  req_payload: web::Json<UpdateQuantityPayload>,
  session: ShopperSession,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId(path.into_inner());
  let quantity = requested_line_quantity(req_payload.quantity)?;
  let view = CartView::new(session.cart.clone());
  log_update(&session, product_id, view.set_quantity(product_id, quantity));

  Ok(HttpResponse::Ok().json(view.render()))
}

#[instrument(name = "handler::increment", skip(path, session), fields(session_id = %session.session_id))]
pub async fn increment_handler(path: web::Path<u64>, session: ShopperSession) -> Result<HttpResponse, AppError> {
  let product_id = ProductId(path.into_inner());
  let view = CartView::new(session.cart.clone());
  log_update(&session, product_id, view.increment(product_id));

  Ok(HttpResponse::Ok().json(view.render()))
}

#[instrument(name = "handler::decrement", skip(path, session), fields(session_id = %session.session_id))]
pub async fn decrement_handler(path: web::Path<u64>, session: ShopperSession) -> Result<HttpResponse, AppError> {
  let product_id = ProductId(path.into_inner());
  let view = CartView::new(session.cart.clone());
  log_update(&session, product_id, view.decrement(product_id));

  Ok(HttpResponse::Ok().json(view.render()))
}

#[instrument(name = "handler::remove_from_cart", skip(path, session), fields(session_id = %session.session_id))]
pub async fn remove_from_cart_handler(path: web::Path<u64>, session: ShopperSession) -> Result<HttpResponse, AppError> {
  let product_id = ProductId(path.into_inner());
  let view = CartView::new(session.cart);
  if !view.remove(product_id) {
    info!("Product {} was not in the cart; nothing removed.", product_id);
  }

  Ok(HttpResponse::Ok().json(view.render()))
}

#[instrument(name = "handler::clear_cart", skip(session), fields(session_id = %session.session_id))]
pub async fn clear_cart_handler(session: ShopperSession) -> Result<HttpResponse, AppError> {
  let view = CartView::new(session.cart);
  let notification = view.clear();

  Ok(HttpResponse::Ok().json(json!({
      "notification": notification,
      "cart": view.render()
  })))
}

#[instrument(name = "handler::finalize_order", skip(session), fields(session_id = %session.session_id))]
pub async fn finalize_order_handler(session: ShopperSession) -> Result<HttpResponse, AppError> {
  let view = CartView::new(session.cart);
  let outcome = view.finalize_order();
  let close_view = matches!(outcome, FinalizeOutcome::Finalized { .. });

  Ok(HttpResponse::Ok().json(json!({
      "outcome": outcome,
      "close_view": close_view,
      "cart": view.render()
  })))
}
