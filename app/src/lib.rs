// app/src/lib.rs

//! HTTP surface of the storefront: each shopper session gets its own in-memory
//! cart, and every catalog, product and cart action is exposed under `/api/v1`.

pub mod config;
pub mod errors;
pub mod sessions;
pub mod state;
pub mod web;
