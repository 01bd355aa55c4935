//! Row selection of the order table.
//!
//! The selection is a set of order ids that survives paging and filtering.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tri-state of the "select all" checkbox in the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: HashSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Row checkbox click.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Header checkbox click.
    ///
    /// Compares the size of the whole selection with the number of visible
    /// rows. When they match the whole selection is cleared, selections on
    /// other pages included; otherwise the selection becomes exactly the
    /// visible ids, dropping selections on other pages.
    pub fn toggle_all_on_page<S: AsRef<str>>(&mut self, visible_ids: &[S]) {
        if self.selected.len() == visible_ids.len() {
            self.selected.clear();
        } else {
            self.selected = visible_ids
                .iter()
                .map(AsRef::<str>::as_ref)
                .map(str::to_string)
                .collect();
        }
    }

    /// Header checkbox rendering.
    ///
    /// `Checked` uses the same size comparison as [`Self::toggle_all_on_page`],
    /// so clicking a checked header always clears the selection. Any other
    /// overlap with the visible rows is `Indeterminate`.
    pub fn header_state<S: AsRef<str>>(&self, visible_ids: &[S]) -> HeaderCheckState {
        if visible_ids.is_empty() {
            return HeaderCheckState::Unchecked;
        }
        if self.selected.len() == visible_ids.len() {
            return HeaderCheckState::Checked;
        }
        let any_visible = visible_ids
            .iter()
            .map(AsRef::<str>::as_ref)
            .any(|id| self.selected.contains(id));
        if any_visible {
            HeaderCheckState::Indeterminate
        } else {
            HeaderCheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_ids(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
        range.map(|n| format!("#CM98{n:02}")).collect()
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = SelectionState::from_ids(["#CM9804"]);
        let before = selection.clone();
        selection.toggle("#CM9801");
        assert!(selection.is_selected("#CM9801"));
        selection.toggle("#CM9801");
        assert_eq!(selection, before);

        selection.toggle("#CM9804");
        assert!(selection.is_empty());
        selection.toggle("#CM9804");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_all_selects_page_then_clears() {
        let visible = page_ids(1..=10);
        let mut selection = SelectionState::new();

        selection.toggle_all_on_page(&visible);
        assert_eq!(selection.len(), 10);
        assert!(visible.iter().all(|id| selection.is_selected(id)));

        selection.toggle_all_on_page(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_replaces_selection_from_other_pages() {
        let mut selection = SelectionState::from_ids(["#CM9809"]);
        let visible = page_ids(1..=5);

        selection.toggle_all_on_page(&visible);
        assert_eq!(selection.len(), 5);
        assert!(!selection.is_selected("#CM9809"));
    }

    #[test]
    fn test_toggle_all_compares_whole_selection_size() {
        // Two ids selected on another page and two rows visible: the sizes
        // match, so the header click clears everything instead of selecting
        // the visible rows.
        let mut selection = SelectionState::from_ids(["#CM9808", "#CM9809"]);
        let visible = page_ids(1..=2);

        selection.toggle_all_on_page(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_on_empty_page_leaves_nothing_selected() {
        let mut selection = SelectionState::new();
        selection.toggle_all_on_page::<String>(&[]);
        assert!(selection.is_empty());

        let mut selection = SelectionState::from_ids(["#CM9801"]);
        selection.toggle_all_on_page::<String>(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_header_state() {
        let visible = page_ids(1..=3);
        let mut selection = SelectionState::from_ids(["#CM9809"]);
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Unchecked);

        selection.toggle("#CM9801");
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Indeterminate);

        selection.toggle("#CM9802");
        selection.toggle("#CM9803");
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Indeterminate);

        selection.toggle("#CM9809");
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Checked);

        assert_eq!(
            selection.header_state::<String>(&[]),
            HeaderCheckState::Unchecked
        );
    }

    #[test]
    fn test_checked_header_click_always_clears() {
        let visible = page_ids(1..=5);
        let mut selection = SelectionState::new();
        selection.toggle_all_on_page(&visible);
        selection.toggle("#CM9807");

        // Whole page plus a row from another page: not fully checked.
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Indeterminate);

        selection.toggle_all_on_page(&visible);
        assert_eq!(selection.len(), 5);
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Checked);

        selection.toggle_all_on_page(&visible);
        assert!(selection.is_empty());
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_header_checked_by_selection_size() {
        // Sizes match although no visible row is selected; a click clears.
        let mut selection = SelectionState::from_ids(["#CM9808", "#CM9809"]);
        let visible = page_ids(1..=2);
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Checked);

        selection.toggle_all_on_page(&visible);
        assert_eq!(selection.header_state(&visible), HeaderCheckState::Unchecked);
    }
}
