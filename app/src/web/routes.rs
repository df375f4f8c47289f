// app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{cart_handlers, catalog_handlers, checkout_handlers, session_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` (and by the API tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .route("/store", web::get().to(catalog_handlers::store_front_handler))
      .route("/catalog", web::get().to(catalog_handlers::catalog_handler))
      .route(
        "/products/{product_id}",
        web::get().to(catalog_handlers::product_detail_handler),
      )
      .route("/sessions", web::post().to(session_handlers::open_session_handler))
      .route(
        "/sessions/{session_id}",
        web::delete().to(session_handlers::close_session_handler),
      )
      // Cart Routes, scoped to the session in the X-Session-ID header
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/finalize", web::post().to(cart_handlers::finalize_order_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/items/{product_id}", web::put().to(cart_handlers::update_quantity_handler))
          .route("/items/{product_id}", web::delete().to(cart_handlers::remove_from_cart_handler))
          .route(
            "/items/{product_id}/increment",
            web::post().to(cart_handlers::increment_handler),
          )
          .route(
            "/items/{product_id}/decrement",
            web::post().to(cart_handlers::decrement_handler),
          ),
      )
      .route("/checkout", web::post().to(checkout_handlers::checkout_now_handler)),
  );
}
