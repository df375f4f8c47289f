// core/src/catalog/mod.rs

//! Read-only product catalog and the filter applied by the catalog listing.

pub mod filter;
pub mod product;
pub mod store;

pub use filter::{CatalogFilter, CategoryFilter, ALL_CATEGORIES_LABEL};
pub use product::{Product, ProductId};
pub use store::Catalog;
