//! Row selection for list bulk actions

use leptos::prelude::*;

/// Выбранные строки списка в порядке выбора
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkSelection {
    ids: Vec<String>,
}

impl BulkSelection {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_selected(id) {
            self.ids.retain(|selected| selected != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Select every id in `all`, or clear the selection if all of them are
    /// already selected.
    pub fn toggle_all(&mut self, all: &[String]) {
        let all_selected = !all.is_empty() && all.iter().all(|id| self.is_selected(id));
        if all_selected {
            self.reset();
        } else {
            self.ids = all.to_vec();
        }
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }
}

#[derive(Clone, Copy)]
pub struct BulkActions {
    selection: RwSignal<BulkSelection>,
}

impl BulkActions {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(BulkSelection::default()),
        }
    }

    pub fn list_elements(&self) -> Vec<String> {
        self.selection.with(|s| s.ids().to_vec())
    }

    pub fn selected_count(&self) -> usize {
        self.selection.with(|s| s.len())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.with(|s| s.is_selected(id))
    }

    pub fn toggle(&self, id: &str) {
        self.selection.update(|s| s.toggle(id));
    }

    pub fn toggle_all(&self, all: &[String]) {
        self.selection.update(|s| s.toggle_all(all));
    }

    pub fn reset(&self) {
        self.selection.update(|s| s.reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut sel = BulkSelection::default();
        sel.toggle("1");
        sel.toggle("2");
        assert_eq!(sel.ids(), ids(&["1", "2"]).as_slice());
        sel.toggle("1");
        assert_eq!(sel.ids(), ids(&["2"]).as_slice());
    }

    #[test]
    fn test_toggle_all() {
        let all = ids(&["1", "2", "3"]);
        let mut sel = BulkSelection::default();
        sel.toggle("2");

        sel.toggle_all(&all);
        assert_eq!(sel.len(), 3);

        sel.toggle_all(&all);
        assert!(sel.is_empty());

        sel.toggle_all(&[]);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut sel = BulkSelection::default();
        sel.toggle("1");
        sel.reset();
        assert!(!sel.is_selected("1"));
    }
}
