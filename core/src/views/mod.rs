// core/src/views/mod.rs

//! View-models for the three storefront panels. Each one reads the catalog,
//! mutates the cart only through a [`CartHandle`](crate::CartHandle), and
//! renders into a serializable model.

pub mod cart_view;
pub mod catalog_view;
pub mod product_detail;

pub use cart_view::{CartLineView, CartView, CartViewModel, FinalizeOutcome};
pub use catalog_view::{CatalogView, CatalogViewModel};
pub use product_detail::{ProductDetail, ProductDetailModel};
