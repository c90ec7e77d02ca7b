//! Live settings: a validated [`Config`] kept in step with a store.
//!
//! Lifecycle:
//!
//! 1. [`Settings::install_defaults`] seeds an empty store on first run
//! 2. [`Settings::load`] reads and validates the blob (defaults on failure)
//! 3. every change notification goes through [`Settings::apply_changes`],
//!    which overlays the new values and re-validates
//!
//! [`Settings::watch`] wires steps 2 and 3 together behind a shared handle.

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{Config, validate};
use crate::error::Result;
use crate::store::{Changes, SettingsStore};

/// The current, always-valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    config: Config,
}

impl Settings {
    /// Wrap an already validated config.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read and validate the store's blob.
    ///
    /// A store that cannot be read yields the defaults; the error is
    /// logged, not returned.
    #[must_use]
    pub fn load(store: &dyn SettingsStore) -> Self {
        match store.get() {
            Ok(blob) => {
                let config = validate(&Value::Object(blob));
                debug!(?config, "settings loaded");
                Self { config }
            }
            Err(e) => {
                warn!("settings store unavailable, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// The current config.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Overlay a change notification and re-validate.
    ///
    /// Keys whose new value is absent were removed from the store and fall
    /// back to their defaults.
    pub fn apply_changes(&mut self, changes: &Changes) -> Config {
        let mut blob = self.config.to_blob();
        for (key, change) in changes {
            match &change.new_value {
                Some(v) => {
                    blob.insert(key.clone(), v.clone());
                }
                None => {
                    blob.remove(key);
                }
            }
        }
        self.config = validate(&Value::Object(blob));
        debug!(config = ?self.config, "settings changed");
        self.config
    }

    /// Write the current config back to `store`.
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<()> {
        store.set(&self.config.to_blob())
    }

    /// Seed an empty store with the default blob. Returns `true` if it
    /// wrote anything.
    pub fn install_defaults(store: &mut dyn SettingsStore) -> Result<bool> {
        if !store.get()?.is_empty() {
            return Ok(false);
        }
        store.set(&Config::default().to_blob())?;
        info!("installed default settings");
        Ok(true)
    }

    /// Load from `store` and subscribe so the returned handle tracks every
    /// later change.
    pub fn watch(store: &mut dyn SettingsStore) -> Arc<Mutex<Self>> {
        let shared = Arc::new(Mutex::new(Self::load(store)));
        let handle = Arc::clone(&shared);
        store.subscribe(Box::new(move |changes| {
            handle
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .apply_changes(changes);
        }));
        shared
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
