// src/lib.rs

//! Storefront: catalog, cart and messaging checkout for a small shop.
//!
//! The crate is synchronous and keeps everything in memory:
//!  - A read-only [`Catalog`] loaded once from JSON.
//!  - A [`Cart`] owned explicitly and shared with views through a [`CartHandle`].
//!  - Filtering over the catalog by free-text query and a single category.
//!  - View-models for the catalog listing, a product detail panel and the cart panel.
//!  - Checkout composition: a plain-text order summary sent through a messaging deep link.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod notification;
pub mod views;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartHandle, CartLine, QuantityUpdate};
pub use crate::catalog::{CatalogFilter, CategoryFilter, Catalog, Product, ProductId, ALL_CATEGORIES_LABEL};
pub use crate::checkout::{CheckoutHandoff, CheckoutSettings, DeepLink, OrderSummary, Platform};
pub use crate::error::{StorefrontError, StorefrontResult};
pub use crate::money::Money;
pub use crate::notification::{Notification, NotificationKind};
pub use crate::views::{CartView, CartViewModel, CatalogView, CatalogViewModel, FinalizeOutcome, ProductDetail};
