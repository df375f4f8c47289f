// core/src/cart/mod.rs

//! Session cart: one line per product, quantities never below one.

pub mod handle;
pub mod line;
pub mod state;

pub use handle::CartHandle;
pub use line::CartLine;
pub use state::{Cart, QuantityUpdate};
