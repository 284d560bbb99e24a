use super::StorageBackend;
use crate::error::{NamesError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the list is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Store a raw value directly, bypassing error simulation.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(NamesError::Store("Simulated write error".to_string()));
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Item, PaginationSettings};
    use crate::names::NameList;
    use crate::store::{NAMES_KEY, PAGINATION_KEY};

    /// Builds a pre-populated [`MemBackend`] the way a previous session
    /// would have left it.
    pub struct NamesFixture {
        pub backend: MemBackend,
        items: Vec<Item>,
    }

    impl Default for NamesFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl NamesFixture {
        pub fn new() -> Self {
            Self {
                backend: MemBackend::new(),
                items: Vec::new(),
            }
        }

        /// Appends `count` active items titled "Name 1".."Name N".
        pub fn with_names(mut self, count: usize) -> Self {
            let start = self.items.len();
            for i in 0..count {
                let n = start + i + 1;
                self.items
                    .push(Item::new(1_000 + n as i64, format!("Name {}", n)));
            }
            self
        }

        pub fn with_name(mut self, title: &str) -> Self {
            let id = 1_000 + self.items.len() as i64 + 1;
            self.items.push(Item::new(id, title));
            self
        }

        pub fn with_completed_name(mut self, title: &str) -> Self {
            let id = 1_000 + self.items.len() as i64 + 1;
            let mut item = Item::new(id, title);
            item.completed = true;
            self.items.push(item);
            self
        }

        pub fn with_settings(self, current_page: usize, items_per_page: usize) -> Self {
            let settings = PaginationSettings {
                current_page,
                items_per_page,
            };
            self.backend.insert_raw(
                PAGINATION_KEY,
                &serde_json::to_string(&settings).unwrap(),
            );
            self
        }

        pub fn build(self) -> MemBackend {
            self.backend
                .insert_raw(NAMES_KEY, &serde_json::to_string(&self.items).unwrap());
            self.backend
        }

        pub fn list(self) -> NameList<MemBackend> {
            NameList::load(self.build())
        }
    }
}
