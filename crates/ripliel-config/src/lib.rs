//! # ripliel-config: settings for ripliel
//!
//! - **[`config`]**: the validated [`Config`] and [`validate`], which turns
//!   any loosely typed JSON value into a complete, in-range config
//! - **[`font`]**: serif and fallback font choices and their CSS stacks
//! - **[`store`]**: the [`SettingsStore`] capability (`get`/`set`/
//!   `subscribe`) with in-memory and JSON-file implementations
//! - **[`settings`]**: [`Settings`], the live config kept in sync with a
//!   store
//!
//! Validation never fails. Only the store layer can return errors, and
//! [`Settings`] absorbs those by falling back to defaults.

pub mod config;
pub mod error;
pub mod font;
pub mod settings;
pub mod store;

pub use config::{Config, validate};
pub use error::{Result, StoreError};
pub use font::{FallbackFont, SerifFont};
pub use settings::Settings;
pub use store::{Blob, Change, Changes, JsonFileStore, MemoryStore, SettingsStore};
