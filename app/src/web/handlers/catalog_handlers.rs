// app/src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use storefront::{CatalogFilter, CatalogView, CategoryFilter, ProductDetail, ProductId};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct CatalogQuery {
  pub q: Option<String>,
  pub category: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ProductDetailQuery {
  pub quantity: Option<u32>,
}

#[instrument(name = "handler::store_front", skip(app_state))]
pub async fn store_front_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let featured = app_state.catalog.featured(app_state.config.featured_count);
  info!("Serving store front with {} featured products.", featured.len());

  Ok(HttpResponse::Ok().json(json!({
      "store_name": app_state.config.store_name,
      "featured": featured
  })))
}

#[instrument(name = "handler::catalog", skip(app_state, query_params), fields(q = ?query_params.q, category = ?query_params.category))]
pub async fn catalog_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<CatalogQuery>,
) -> Result<HttpResponse, AppError> {
  let query_params = query_params.into_inner();
  let filter = CatalogFilter::new(
    query_params.q.unwrap_or_default(),
    CategoryFilter::parse(query_params.category.as_deref()),
  );
  let view = CatalogView::with_filter(&app_state.catalog, filter);
  let model = view.render();
  info!("Catalog filtered: {}.", model.results_label);

  Ok(HttpResponse::Ok().json(model))
}

#[instrument(name = "handler::product_detail", skip(app_state, path, query_params), fields(product_id = %path.as_ref()))]
pub async fn product_detail_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u64>,
  query_params: web::Query<ProductDetailQuery>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.require(ProductId(path.into_inner()))?;
  let detail = ProductDetail::with_quantity(product, query_params.quantity.unwrap_or(1));

  Ok(HttpResponse::Ok().json(detail.render()))
}
