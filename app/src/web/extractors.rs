// app/src/web/extractors.rs

use actix_web::{web, FromRequest, HttpRequest};
use storefront::CartHandle;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

pub const SESSION_HEADER: &str = "X-Session-ID";

/// The shopper session named by the `X-Session-ID` header, with its cart.
#[derive(Debug)]
pub struct ShopperSession {
  pub session_id: Uuid,
  pub cart: CartHandle,
}

impl FromRequest for ShopperSession {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    futures_util::future::ready(resolve_session(req))
  }
}

fn resolve_session(req: &HttpRequest) -> Result<ShopperSession, AppError> {
  let app_state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;

  let session_id = req
    .headers()
    .get(SESSION_HEADER)
    .and_then(|value| value.to_str().ok())
    .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
    .ok_or_else(|| {
      warn!("ShopperSession extractor: Missing or invalid {} header.", SESSION_HEADER);
      AppError::Session(format!("A valid {} header is required.", SESSION_HEADER))
    })?;

  let cart = app_state.sessions.cart(&session_id).ok_or_else(|| {
    warn!(%session_id, "ShopperSession extractor: Unknown session.");
    AppError::Session(format!("Session {} does not exist.", session_id))
  })?;

  Ok(ShopperSession { session_id, cart })
}

/// The request's `User-Agent`, if any.
pub fn user_agent(req: &HttpRequest) -> Option<&str> {
  req
    .headers()
    .get(actix_web::http::header::USER_AGENT)
    .and_then(|value| value.to_str().ok())
}
