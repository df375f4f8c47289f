// app/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use storefront::{CartView, Platform, ProductDetail, ProductId};
use tracing::{info, instrument};

use super::cart_handlers::{validated_quantity, AddToCartRequestPayload};
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::{user_agent, ShopperSession};

/// "Checkout now": adds the product, composes the order message and returns the
/// deep link for the client to open. Delivery of the message is never observed.
#[instrument(
    name = "handler::checkout_now",
    skip(app_state, req, req_payload, session),
    fields(session_id = %session.session_id, product_id = %req_payload.product_id)
)]
pub async fn checkout_now_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  req_payload: web::Json<AddToCartRequestPayload>,
  session: ShopperSession,
) -> Result<HttpResponse, AppError> {
  let quantity = validated_quantity(req_payload.quantity)?;
  let product = app_state.catalog.require(ProductId(req_payload.product_id))?;
  let platform = Platform::from_user_agent(user_agent(&req));

  let handoff = ProductDetail::with_quantity(product, quantity).checkout_now(&session.cart, &app_state.checkout, platform);
  info!("Checkout link composed for session {} ({:?}).", session.session_id, platform);

  Ok(HttpResponse::Ok().json(json!({
      "handoff": handoff,
      "cart": CartView::new(session.cart).render()
  })))
}
