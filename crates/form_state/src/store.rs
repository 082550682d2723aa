//! Central store for control values, checked flags and selections.
//!
//! The store does no DOM work and enforces no cross-control rules: keeping a
//! radio group exclusive is the caller's job.

use crate::id::ControlId;
use crate::state::{ControlState, SelectedIndex};
use std::collections::HashMap;

/// Live state for every known form control.
///
/// # Example
///
/// ```
/// use form_state::{ControlId, ControlValueStore};
///
/// let mut store = ControlValueStore::new();
/// let id = ControlId::from_raw(1);
///
/// store.ensure_initial(id, "Hello".to_string());
/// store.set_value(id, "Hello World");
///
/// assert_eq!(store.get(id), Some("Hello World"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ControlValueStore {
    values: HashMap<ControlId, ControlState>,
}

impl ControlValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this control.
    pub fn has(&self, id: ControlId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the stored value for this control, if any.
    pub fn get(&self, id: ControlId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Overwrite the value. Returns `true` if it changed.
    pub fn set_value(&mut self, id: ControlId, value: &str) -> bool {
        let st = self.values.entry(id).or_default();
        if st.value == value {
            return false;
        }
        st.value.clear();
        st.value.push_str(value);
        true
    }

    /// Returns `true` if this checkbox/radio control is checked.
    pub fn is_checked(&self, id: ControlId) -> bool {
        self.values.get(&id).is_some_and(|s| s.checked)
    }

    /// Set the checked flag. Returns `true` if it changed.
    pub fn set_checked(&mut self, id: ControlId, checked: bool) -> bool {
        let st = self.values.entry(id).or_default();
        let changed = st.checked != checked;
        st.checked = checked;
        changed
    }

    /// Selected option index of a select control, if the control is known.
    pub fn selected_index(&self, id: ControlId) -> Option<SelectedIndex> {
        self.values.get(&id).map(|s| s.selected_index)
    }

    /// Set the selected option index. Returns `true` if it changed.
    pub fn set_selected_index(&mut self, id: ControlId, index: SelectedIndex) -> bool {
        let st = self.values.entry(id).or_default();
        let changed = st.selected_index != index;
        st.selected_index = index;
        changed
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value.
    pub fn ensure_initial(&mut self, id: ControlId, initial: String) {
        self.values.entry(id).or_insert(ControlState {
            value: initial,
            ..ControlState::default()
        });
    }

    /// Ensure an entry exists with the initial checked state.
    ///
    /// If an entry already exists, this is a no-op.
    pub fn ensure_initial_checked(&mut self, id: ControlId, initial_checked: bool) {
        self.values.entry(id).or_insert(ControlState {
            checked: initial_checked,
            ..ControlState::default()
        });
    }

    /// Ensure an entry exists with the initial selected index.
    ///
    /// If an entry already exists, this is a no-op.
    pub fn ensure_initial_selected(&mut self, id: ControlId, initial_index: SelectedIndex) {
        self.values.entry(id).or_insert(ControlState {
            selected_index: initial_index,
            ..ControlState::default()
        });
    }

    /// Forget a control. Returns `true` if it was known.
    pub fn remove(&mut self, id: ControlId) -> bool {
        self.values.remove(&id).is_some()
    }

    /// Keep only the controls for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(ControlId) -> bool) {
        self.values.retain(|id, _| keep(*id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NO_SELECTION;

    fn id(raw: u64) -> ControlId {
        ControlId::from_raw(raw)
    }

    #[test]
    fn ensure_initial_does_not_overwrite() {
        let mut store = ControlValueStore::new();
        store.ensure_initial(id(1), "a".to_string());
        store.ensure_initial(id(1), "b".to_string());
        store.ensure_initial_checked(id(1), true);

        assert_eq!(store.get(id(1)), Some("a"));
        assert!(!store.is_checked(id(1)));
    }

    #[test]
    fn set_value_reports_changes() {
        let mut store = ControlValueStore::new();
        assert!(store.set_value(id(1), "x"));
        assert!(!store.set_value(id(1), "x"));
        assert!(store.set_value(id(1), ""));

        assert_eq!(store.get(id(1)), Some(""));
    }

    #[test]
    fn checked_state_reports_changes() {
        let mut store = ControlValueStore::new();
        assert!(!store.is_checked(id(2)));
        assert!(store.set_checked(id(2), true));
        assert!(!store.set_checked(id(2), true));
        assert!(store.set_checked(id(2), false));
        assert!(!store.is_checked(id(2)));
    }

    #[test]
    fn selected_index_defaults_to_no_selection() {
        let mut store = ControlValueStore::new();
        assert_eq!(store.selected_index(id(3)), None);

        store.ensure_initial(id(3), String::new());
        assert_eq!(store.selected_index(id(3)), Some(NO_SELECTION));

        assert!(store.set_selected_index(id(3), 2));
        assert!(!store.set_selected_index(id(3), 2));
        assert_eq!(store.selected_index(id(3)), Some(2));
    }

    #[test]
    fn remove_and_retain() {
        let mut store = ControlValueStore::new();
        for raw in 1..=4 {
            store.ensure_initial(id(raw), String::new());
        }
        assert!(store.remove(id(4)));
        assert!(!store.remove(id(4)));

        store.retain(|c| c.as_raw() % 2 == 1);
        assert_eq!(store.len(), 2);
        assert!(store.has(id(1)) && store.has(id(3)));

        store.retain(|_| false);
        assert!(store.is_empty());
    }
}
