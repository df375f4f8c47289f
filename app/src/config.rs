// app/src/config.rs

use crate::errors::{AppError, Result};
use crate::sessions::DEFAULT_IDLE_MINUTES;

// One year.
const MAX_IDLE_MINUTES: i64 = 525_600;
use dotenvy::dotenv;
use std::env;
use storefront::checkout::DEFAULT_MERCHANT_PHONE;
use storefront::CheckoutSettings;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// `None` serves the catalog compiled into the binary.
  pub catalog_path: Option<String>,
  pub merchant_phone: String,
  pub featured_count: usize,
  pub store_name: String,
  pub session_idle_minutes: i64,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      catalog_path: None,
      merchant_phone: DEFAULT_MERCHANT_PHONE.to_string(),
      featured_count: 6,
      store_name: "NYNNA PRESENTES".to_string(),
      session_idle_minutes: DEFAULT_IDLE_MINUTES,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; unset variables take defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
      None => defaults.server_port,
    };
    let catalog_path = lookup("CATALOG_PATH").filter(|p| !p.trim().is_empty());
    let merchant_phone = lookup("MERCHANT_PHONE").unwrap_or(defaults.merchant_phone);
    if !merchant_phone.chars().any(|c| c.is_ascii_digit()) {
      return Err(AppError::Config("MERCHANT_PHONE must contain digits".to_string()));
    }
    let featured_count = match lookup("FEATURED_COUNT") {
      Some(raw) => raw
        .parse::<usize>()
        .map_err(|e| AppError::Config(format!("Invalid FEATURED_COUNT: {}", e)))?,
      None => defaults.featured_count,
    };
    let store_name = lookup("STORE_NAME").unwrap_or(defaults.store_name);
    let session_idle_minutes = match lookup("SESSION_IDLE_MINUTES") {
      Some(raw) => raw
        .parse::<i64>()
        .ok()
        .filter(|minutes| (1..=MAX_IDLE_MINUTES).contains(minutes))
        .ok_or_else(|| AppError::Config(format!("Invalid SESSION_IDLE_MINUTES: '{}'", raw)))?,
      None => defaults.session_idle_minutes,
    };

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      catalog_path,
      merchant_phone,
      featured_count,
      store_name,
      session_idle_minutes,
    })
  }

  pub fn session_idle_timeout(&self) -> chrono::Duration {
    chrono::Duration::minutes(self.session_idle_minutes)
  }

  pub fn checkout_settings(&self) -> CheckoutSettings {
    CheckoutSettings {
      merchant_phone: self.merchant_phone.clone(),
    }
  }
}
