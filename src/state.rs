use std::collections::BTreeSet;

use crate::data::filter::FilterSelection;
use crate::data::model::{CapSegment, RecordStore};
use crate::labels::Language;

/// The multi-select widgets in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Sector,
    CapSegment,
    Bank,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The user's choices, independent of rendering and of the loaded data.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub language: Language,

    /// Current country plus per-column selections.
    pub selection: FilterSelection,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start on the first country with everything selected.
    pub fn new(store: &RecordStore) -> Self {
        let country = store.countries().into_iter().next().unwrap_or_default();
        Self {
            language: Language::default(),
            selection: FilterSelection::defaults_for(store, &country),
            status_message: None,
        }
    }

    /// Switch country; previous narrowing does not carry over.
    pub fn set_country(&mut self, store: &RecordStore, country: &str) {
        if self.selection.country != country {
            self.selection = FilterSelection::defaults_for(store, country);
        }
    }

    pub fn toggle_sector(&mut self, sector: &str) {
        toggle(&mut self.selection.sectors, sector.to_string());
    }

    pub fn toggle_bank(&mut self, short_name: &str) {
        toggle(&mut self.selection.short_names, short_name.to_string());
    }

    pub fn toggle_cap_segment(&mut self, cap: CapSegment) {
        toggle(&mut self.selection.cap_segments, cap);
    }

    /// Select all values of a column for the current country.
    pub fn select_all(&mut self, store: &RecordStore, column: FilterColumn) {
        let defaults = FilterSelection::defaults_for(store, &self.selection.country);
        match column {
            FilterColumn::Sector => self.selection.sectors = defaults.sectors,
            FilterColumn::CapSegment => self.selection.cap_segments = defaults.cap_segments,
            FilterColumn::Bank => self.selection.short_names = defaults.short_names,
        }
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: FilterColumn) {
        match column {
            FilterColumn::Sector => self.selection.sectors.clear(),
            FilterColumn::CapSegment => self.selection.cap_segments.clear(),
            FilterColumn::Bank => self.selection.short_names.clear(),
        }
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_store;

    #[test]
    fn starts_on_first_country_with_defaults() {
        let store = sample_store();
        let state = AppState::new(&store);
        assert_eq!(state.selection, FilterSelection::defaults_for(&store, "India"));
        assert_eq!(state.language, Language::English);
    }

    #[test]
    fn toggling_and_bulk_selection() {
        let store = sample_store();
        let mut state = AppState::new(&store);

        state.toggle_sector("PSU");
        assert!(!state.selection.sectors.contains("PSU"));
        state.toggle_sector("PSU");
        assert!(state.selection.sectors.contains("PSU"));

        state.toggle_cap_segment(CapSegment::Small);
        assert_eq!(state.selection.cap_segments.len(), 2);

        state.select_none(FilterColumn::Bank);
        assert!(state.selection.short_names.is_empty());
        state.select_all(&store, FilterColumn::Bank);
        assert_eq!(state.selection.short_names.len(), 3);
    }

    #[test]
    fn changing_country_resets_selection() {
        let store = sample_store();
        let mut state = AppState::new(&store);
        state.toggle_bank("SBIN");

        state.set_country(&store, "USA");
        assert_eq!(state.selection, FilterSelection::defaults_for(&store, "USA"));

        // re-selecting the same country keeps the narrowing
        state.toggle_bank("JPM");
        state.set_country(&store, "USA");
        assert!(!state.selection.short_names.contains("JPM"));
    }
}
