//! # Storage Layer
//!
//! The list manager never touches files directly. It talks to a
//! [`StorageBackend`]: a flat key-value store of serialized strings, the same
//! shape as browser local storage.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: one JSON file per key inside a data directory
//!   - `names.json`: the item list (JSON array of `{id, title, completed}`)
//!   - `paginationSettings.json`: `{currentPage, itemsPerPage}`
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::MemBackend`]: in-memory map for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── names.json
//! ├── paginationSettings.json
//! └── config.json              # presentation preferences (CONFIG_KEY)
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key holding the serialized item list.
pub const NAMES_KEY: &str = "names";

/// Key holding the serialized pagination settings.
pub const PAGINATION_KEY: &str = "paginationSettings";

/// Key holding presentation preferences, see [`crate::config`].
pub const CONFIG_KEY: &str = "config";

/// Abstract interface for raw key-value storage.
///
/// Takes `&self` everywhere; implementations that need mutation use
/// interior mutability or the filesystem.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) when nothing has been stored yet.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
