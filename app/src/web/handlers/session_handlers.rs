// app/src/web/handlers/session_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::open_session", skip(app_state))]
pub async fn open_session_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let session_id = app_state.sessions.open();
  info!("Opened session {}. Active sessions: {}", session_id, app_state.sessions.len());

  Ok(HttpResponse::Created().json(json!({
      "message": "Session opened.",
      "session_id": session_id
  })))
}

#[instrument(name = "handler::close_session", skip(app_state, path), fields(session_id = %path.as_ref()))]
pub async fn close_session_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let session_id = path.into_inner();
  if !app_state.sessions.close(&session_id) {
    warn!("Close requested for unknown session {}.", session_id);
    return Err(AppError::NotFound(format!("Session {} does not exist.", session_id)));
  }

  Ok(HttpResponse::NoContent().finish())
}
