//! # form_state
//!
//! UI-agnostic live state for form controls.
//!
//! - [`ControlId`]: opaque identifier for a control
//! - [`ControlValueStore`]: value, checked flag and selection index per control
//! - [`ControlStore`]: the trait the reset and seeding logic is written against
//!
//! The DOM holds a control's *defaults* (its `value`/`checked`/`selected`
//! attributes); this crate holds what the control currently shows. Keeping the
//! two apart lets reset logic run against an in-memory fake in tests.
//!
//! ## Integration
//!
//! Convert DOM node ids at the boundary:
//! ```ignore
//! fn to_control_id(id: dom::Id) -> ControlId {
//!     ControlId::from_raw(id.0 as u64)
//! }
//! ```

mod id;
mod state;
mod store;
mod traits;

pub use id::ControlId;
pub use state::{NO_SELECTION, SelectedIndex};
pub use store::ControlValueStore;
pub use traits::ControlStore;
