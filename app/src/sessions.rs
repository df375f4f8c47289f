// app/src/sessions.rs

//! In-memory shopper sessions. Each session owns one cart; nothing survives a restart.
//! Sessions end when closed by the shopper or after sitting idle past the timeout.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use storefront::CartHandle;
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_IDLE_MINUTES: i64 = 120;

#[derive(Debug)]
struct SessionEntry {
  cart: CartHandle,
  last_seen: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SessionStore {
  entries: RwLock<HashMap<Uuid, SessionEntry>>,
  idle_timeout: Duration,
}

impl Default for SessionStore {
  fn default() -> Self {
    Self::new(Duration::minutes(DEFAULT_IDLE_MINUTES))
  }
}

impl SessionStore {
  pub fn new(idle_timeout: Duration) -> Self {
    Self {
      entries: RwLock::new(HashMap::new()),
      idle_timeout,
    }
  }

  /// Opens a session after dropping every session idle at this instant.
  pub fn open(&self) -> Uuid {
    let now = Utc::now();
    self.sweep_idle(now);

    let session_id = Uuid::new_v4();
    self.entries.write().insert(
      session_id,
      SessionEntry {
        cart: CartHandle::default(),
        last_seen: now,
      },
    );
    info!(%session_id, "Shopper session opened.");
    session_id
  }

  /// The session's cart handle, refreshing its last-seen time. An idle session
  /// is dropped and reported as missing. The store lock is released before returning.
  pub fn cart(&self, session_id: &Uuid) -> Option<CartHandle> {
    let now = Utc::now();
    let mut entries = self.entries.write();
    let entry = entries.get_mut(session_id)?;
    if now - entry.last_seen > self.idle_timeout {
      entries.remove(session_id);
      debug!(%session_id, "Idle session expired on access.");
      return None;
    }
    entry.last_seen = now;
    Some(entry.cart.clone())
  }

  /// Ends a session; returns whether it existed.
  pub fn close(&self, session_id: &Uuid) -> bool {
    let closed = self.entries.write().remove(session_id).is_some();
    if closed {
      info!(%session_id, "Shopper session closed.");
    }
    closed
  }

  /// Drops sessions not seen within the idle timeout as of `now`. Returns how many went.
  pub fn sweep_idle(&self, now: DateTime<Utc>) -> usize {
    let mut entries = self.entries.write();
    let before = entries.len();
    entries.retain(|_, entry| now - entry.last_seen <= self.idle_timeout);
    let swept = before - entries.len();
    if swept > 0 {
      info!(swept, remaining = entries.len(), "Idle shopper sessions dropped.");
    }
    swept
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}
