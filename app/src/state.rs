// app/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use crate::sessions::SessionStore;
use std::sync::Arc;
use storefront::{Catalog, CheckoutSettings};

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<Catalog>,
  pub sessions: Arc<SessionStore>,
  pub checkout: Arc<CheckoutSettings>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: AppConfig, catalog: Catalog) -> Self {
    Self {
      catalog: Arc::new(catalog),
      sessions: Arc::new(SessionStore::new(config.session_idle_timeout())),
      checkout: Arc::new(config.checkout_settings()),
      config: Arc::new(config),
    }
  }

  /// Loads the configured catalog file, or the bundled one when none is set.
  pub fn load(config: AppConfig) -> Result<Self> {
    let catalog = match &config.catalog_path {
      Some(path) => Catalog::from_path(path)?,
      None => Catalog::bundled()?,
    };
    Ok(Self::new(config, catalog))
  }
}
