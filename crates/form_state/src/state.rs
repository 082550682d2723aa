//! Per-control state stored in the [`ControlValueStore`](crate::ControlValueStore).

/// Index of the selected option in a select control; [`NO_SELECTION`] for none.
pub type SelectedIndex = i32;

pub const NO_SELECTION: SelectedIndex = -1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ControlState {
    /// Current text value (text-like and numeric controls).
    pub value: String,

    /// Checkbox/radio checked flag.
    pub checked: bool,

    /// Select controls only.
    pub selected_index: SelectedIndex,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            value: String::new(),
            checked: false,
            selected_index: NO_SELECTION,
        }
    }
}
