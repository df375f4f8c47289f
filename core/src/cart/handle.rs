// core/src/cart/handle.rs
use super::state::Cart;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared ownership of one shopper's [`Cart`]. Cloning the handle shares the cart.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code.
#[derive(Debug, Default)]
pub struct CartHandle(Arc<RwLock<Cart>>);

impl CartHandle {
  pub fn new(cart: Cart) -> Self {
    CartHandle(Arc::new(RwLock::new(cart)))
  }

  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, Cart> {
    self.0.read()
  }

  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, Cart> {
    self.0.write()
  }

  /// Runs `f` under the write lock and releases it before returning.
  pub fn update<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
    f(&mut *self.0.write())
  }

  /// Runs `f` under the read lock and releases it before returning.
  pub fn inspect<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
    f(&*self.0.read())
  }

  pub fn shares_cart_with(&self, other: &CartHandle) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl Clone for CartHandle {
  fn clone(&self) -> Self {
    CartHandle(Arc::clone(&self.0))
  }
}
