//! # List State Manager
//!
//! [`NameList`] owns the canonical list of items, the pagination settings and
//! the transient UI state (search query, pending clear-all confirmation).
//!
//! Every mutating operation writes the full list back through the injected
//! [`StorageBackend`]. Persistence is best effort: a failed write is logged and
//! the in-memory state still changes. Errors returned to the caller are only
//! the ones a user can act on (duplicate titles, bad indexes, bad page sizes).
//!
//! Derived views (`filtered_names`, counts, `total_pages`, `page_entries`) are
//! plain methods computed from current state on every call.
//!
//! Indexes taken by [`NameList::edit`] and [`NameList::remove`] are positions
//! in the full list, as returned by [`NameList::page_entries`].

use crate::error::{NamesError, Result};
use crate::filter;
use crate::model::{Item, ItemId, PaginationSettings};
use crate::pagination;
use crate::store::{StorageBackend, NAMES_KEY};
use chrono::Utc;
use tracing::{debug, error, warn};

pub struct NameList<B: StorageBackend> {
    backend: B,
    items: Vec<Item>,
    settings: PaginationSettings,
    query: String,
    confirming: bool,
}

impl<B: StorageBackend> NameList<B> {
    /// Restores the list and pagination settings from `backend`.
    pub fn load(backend: B) -> Self {
        let items = load_items(&backend);
        let settings = pagination::load(&backend);
        let mut list = Self {
            backend,
            items,
            settings,
            query: String::new(),
            confirming: false,
        };
        list.settle_page();
        list
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn settings(&self) -> PaginationSettings {
        self.settings
    }

    pub fn current_page(&self) -> usize {
        self.settings.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.settings.items_per_page
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// True while a clear-all confirmation prompt is showing.
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    // --- Derived views ---

    pub fn filtered_names(&self) -> Vec<&Item> {
        filter::filter_names(&self.items, &self.query)
    }

    pub fn incomplete_count(&self) -> usize {
        filter::incomplete_count(&self.items)
    }

    pub fn complete_count(&self) -> usize {
        filter::complete_count(&self.items)
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_names()
            .len()
            .div_ceil(self.settings.items_per_page)
    }

    pub fn per_page_options(&self) -> &'static [usize] {
        pagination::per_page_options()
    }

    /// The current page of the filtered view, paired with each item's
    /// position in the full list.
    pub fn page_entries(&self) -> Vec<(usize, &Item)> {
        let per_page = self.settings.items_per_page;
        let skip = (self.settings.current_page - 1) * per_page;
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter::matches(item, &self.query))
            .skip(skip)
            .take(per_page)
            .collect()
    }

    // --- Operations ---

    pub fn check_duplicate(&self, title: &str) -> bool {
        self.items.iter().any(|item| item.title_matches(title))
    }

    /// Prepends a new item. Blank input is ignored and yields `Ok(None)`.
    pub fn add(&mut self, title: &str) -> Result<Option<ItemId>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }
        if self.check_duplicate(title) {
            return Err(NamesError::DuplicateTitle(title.to_string()));
        }

        let id = self.next_id()?;
        self.items.insert(0, Item::new(id, title));
        debug!(id, title, "Added name");
        self.save_names();
        Ok(Some(id))
    }

    pub fn edit(&mut self, index: usize, new_title: &str) -> Result<()> {
        self.check_index(index)?;
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Err(NamesError::EmptyTitle);
        }
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && item.title_matches(new_title));
        if collides {
            return Err(NamesError::DuplicateTitle(new_title.to_string()));
        }

        let item = &mut self.items[index];
        item.title = new_title.to_string();
        item.editing = false;
        debug!(id = item.id, title = new_title, "Edited name");
        self.save_names();
        Ok(())
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.items[index].editing = true;
        Ok(())
    }

    pub fn cancel_edit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.items[index].editing = false;
        Ok(())
    }

    /// Marks the item with `id` as done.
    pub fn complete(&mut self, id: ItemId) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(NamesError::ItemNotFound(id))?;
        item.completed = true;
        debug!(id, "Completed name");
        self.save_names();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Item> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        debug!(id = removed.id, "Removed name");

        self.settle_page();
        self.save_settings();
        self.save_names();
        Ok(removed)
    }

    /// Drops every completed item and returns how many were removed.
    pub fn clear_done(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        debug!(removed, "Cleared completed names");

        self.save_names();
        self.settings.current_page = 1;
        self.save_settings();
        self.confirming = false;
        removed
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
        debug!("Cleared all names");
        self.save_names();
        self.settings.current_page = 1;
        self.save_settings();
        self.confirming = false;
    }

    pub fn request_clear_all(&mut self) {
        self.confirming = true;
    }

    pub fn cancel_clear_all(&mut self) {
        self.confirming = false;
    }

    pub fn confirm_clear_all(&mut self) {
        self.clear_all();
    }

    /// Moves to `page`, clamped to the pages that exist. Returns the page
    /// actually selected.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let last = self.total_pages().max(1);
        self.settings.current_page = page.clamp(1, last);
        self.save_settings();
        self.settings.current_page
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        let options = pagination::per_page_options();
        if !options.contains(&items_per_page) {
            return Err(NamesError::InvalidPageSize(items_per_page, options));
        }
        self.settings.current_page = 1;
        self.settings.items_per_page = items_per_page;
        self.save_settings();
        Ok(())
    }

    /// Sets the search query. Not persisted.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        let before = self.settings.current_page;
        self.settle_page();
        if self.settings.current_page != before {
            self.save_settings();
        }
    }

    // --- Internals ---

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(NamesError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    fn next_id(&self) -> Result<ItemId> {
        let now = Utc::now().timestamp_millis();
        match self.items.iter().map(|item| item.id).max() {
            Some(max) if now <= max => max.checked_add(1).ok_or(NamesError::IdsExhausted),
            _ => Ok(now),
        }
    }

    /// Keeps the current page inside the filtered view: back to page 1 when
    /// nothing matches, otherwise no further than the last page.
    fn settle_page(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            self.settings.current_page = 1;
        } else if self.settings.current_page > total {
            self.settings.current_page = total;
        }
    }

    fn save_names(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(NamesError::from)
            .and_then(|json| self.backend.save(NAMES_KEY, &json));
        if let Err(e) = result {
            error!(error = %e, "Error saving names");
        }
    }

    fn save_settings(&self) {
        pagination::save(&self.backend, &self.settings);
    }
}

fn load_items<B: StorageBackend>(backend: &B) -> Vec<Item> {
    match backend.load(NAMES_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Error parsing stored names, starting empty");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "Error reading stored names, starting empty");
            Vec::new()
        }
    }
}
