// core/src/error.rs
use crate::catalog::ProductId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
  #[error("Failed to read catalog from '{path}'. Source: {source}")]
  CatalogIo {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Catalog data is not valid JSON product records. Source: {source}")]
  CatalogParse {
    #[from]
    source: serde_json::Error,
  },

  #[error("Catalog lists product id {id} more than once")]
  DuplicateProductId { id: ProductId },

  #[error("Product not found: {id}")]
  ProductNotFound { id: ProductId },
}

pub type StorefrontResult<T, E = StorefrontError> = std::result::Result<T, E>;
