//! Control store trait defining the interface for control state management.
//!
//! Reset and seeding logic is written against this trait so it can run
//! against [`ControlValueStore`](crate::ControlValueStore) or a test double.

use crate::id::ControlId;
use crate::state::SelectedIndex;

/// Read/write access to the live state of form controls.
pub trait ControlStore {
    // =========================================================================
    // Initialization
    // =========================================================================

    /// Ensure a value entry exists; if missing, inserts `initial`.
    fn ensure_initial(&mut self, id: ControlId, initial: String);

    /// Ensure a checkbox/radio entry exists with the given initial checked state.
    fn ensure_initial_checked(&mut self, id: ControlId, initial_checked: bool);

    /// Ensure a select entry exists with the given initial selection.
    fn ensure_initial_selected(&mut self, id: ControlId, initial_index: SelectedIndex);

    /// Returns `true` if the store already tracks this control.
    fn has(&self, id: ControlId) -> bool;

    // =========================================================================
    // Values
    // =========================================================================

    fn get(&self, id: ControlId) -> Option<&str>;

    /// Returns `true` if the value changed.
    fn set_value(&mut self, id: ControlId, value: &str) -> bool;

    // =========================================================================
    // Checkbox/Radio
    // =========================================================================

    fn is_checked(&self, id: ControlId) -> bool;

    /// Returns `true` if the state changed.
    fn set_checked(&mut self, id: ControlId, checked: bool) -> bool;

    // =========================================================================
    // Select
    // =========================================================================

    fn selected_index(&self, id: ControlId) -> Option<SelectedIndex>;

    /// Returns `true` if the selection changed.
    fn set_selected_index(&mut self, id: ControlId, index: SelectedIndex) -> bool;
}

// =============================================================================
// Implementation for ControlValueStore
// =============================================================================

impl ControlStore for crate::store::ControlValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: ControlId, initial: String) {
        crate::store::ControlValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn ensure_initial_checked(&mut self, id: ControlId, initial_checked: bool) {
        crate::store::ControlValueStore::ensure_initial_checked(self, id, initial_checked)
    }

    #[inline]
    fn ensure_initial_selected(&mut self, id: ControlId, initial_index: SelectedIndex) {
        crate::store::ControlValueStore::ensure_initial_selected(self, id, initial_index)
    }

    #[inline]
    fn has(&self, id: ControlId) -> bool {
        crate::store::ControlValueStore::has(self, id)
    }

    #[inline]
    fn get(&self, id: ControlId) -> Option<&str> {
        crate::store::ControlValueStore::get(self, id)
    }

    #[inline]
    fn set_value(&mut self, id: ControlId, value: &str) -> bool {
        crate::store::ControlValueStore::set_value(self, id, value)
    }

    #[inline]
    fn is_checked(&self, id: ControlId) -> bool {
        crate::store::ControlValueStore::is_checked(self, id)
    }

    #[inline]
    fn set_checked(&mut self, id: ControlId, checked: bool) -> bool {
        crate::store::ControlValueStore::set_checked(self, id, checked)
    }

    #[inline]
    fn selected_index(&self, id: ControlId) -> Option<SelectedIndex> {
        crate::store::ControlValueStore::selected_index(self, id)
    }

    #[inline]
    fn set_selected_index(&mut self, id: ControlId, index: SelectedIndex) -> bool {
        crate::store::ControlValueStore::set_selected_index(self, id, index)
    }
}
