//! Persisted pagination settings.
//!
//! Loading never fails: anything missing, unreadable, or out of range falls
//! back to [`PaginationSettings::default`]. Saving never fails either; a
//! storage error is logged and the previously stored value stays as it was.

use crate::error::NamesError;
use crate::model::PaginationSettings;
use crate::store::{StorageBackend, PAGINATION_KEY};
use tracing::{error, warn};

/// Page sizes a user may choose from.
pub const PER_PAGE_OPTIONS: &[usize] = &[5, 10, 20, 50];

pub fn per_page_options() -> &'static [usize] {
    PER_PAGE_OPTIONS
}

pub fn load<B: StorageBackend>(backend: &B) -> PaginationSettings {
    let raw = match backend.load(PAGINATION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return PaginationSettings::default(),
        Err(e) => {
            warn!(error = %e, "Error reading pagination settings");
            return PaginationSettings::default();
        }
    };

    match serde_json::from_str::<PaginationSettings>(&raw) {
        Ok(settings) if is_valid(&settings) => settings,
        Ok(settings) => {
            warn!(
                current_page = settings.current_page,
                items_per_page = settings.items_per_page,
                "Ignoring out-of-range pagination settings"
            );
            PaginationSettings::default()
        }
        Err(e) => {
            warn!(error = %e, "Error parsing pagination settings");
            PaginationSettings::default()
        }
    }
}

pub fn save<B: StorageBackend>(backend: &B, settings: &PaginationSettings) {
    let result = serde_json::to_string(settings)
        .map_err(NamesError::from)
        .and_then(|json| backend.save(PAGINATION_KEY, &json));
    if let Err(e) = result {
        error!(error = %e, "Error saving pagination settings");
    }
}

fn is_valid(settings: &PaginationSettings) -> bool {
    settings.current_page >= 1 && PER_PAGE_OPTIONS.contains(&settings.items_per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    #[test]
    fn defaults_when_nothing_stored() {
        let backend = MemBackend::new();
        assert_eq!(
            load(&backend),
            PaginationSettings {
                current_page: 1,
                items_per_page: 5
            }
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let backend = MemBackend::new();
        let settings = PaginationSettings {
            current_page: 3,
            items_per_page: 20,
        };
        save(&backend, &settings);
        assert_eq!(load(&backend), settings);
    }

    #[test]
    fn malformed_json_falls_back_to_default() {
        let backend = MemBackend::new();
        backend.insert_raw(PAGINATION_KEY, "{not json");
        assert_eq!(load(&backend), PaginationSettings::default());
    }

    #[test]
    fn unknown_page_size_falls_back_to_default() {
        let backend = MemBackend::new();
        backend.insert_raw(PAGINATION_KEY, r#"{"currentPage":2,"itemsPerPage":7}"#);
        assert_eq!(load(&backend), PaginationSettings::default());
    }

    #[test]
    fn page_zero_falls_back_to_default() {
        let backend = MemBackend::new();
        backend.insert_raw(PAGINATION_KEY, r#"{"currentPage":0,"itemsPerPage":10}"#);
        assert_eq!(load(&backend), PaginationSettings::default());
    }

    #[test]
    fn failed_save_keeps_previous_settings() {
        let backend = MemBackend::new();
        let first = PaginationSettings {
            current_page: 2,
            items_per_page: 10,
        };
        save(&backend, &first);

        backend.set_simulate_write_error(true);
        save(
            &backend,
            &PaginationSettings {
                current_page: 4,
                items_per_page: 50,
            },
        );

        assert_eq!(load(&backend), first);
    }

    #[test]
    fn options_include_default_page_size() {
        assert!(per_page_options().contains(&PaginationSettings::default().items_per_page));
    }
}
