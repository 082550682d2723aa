//! Form control classification, state seeding and reset.
//!
//! [`seed_control_state_from_dom`] walks a [`dom::Node`] tree, builds a
//! [`FormControlIndex`] and fills a [`form_state::ControlStore`] with each
//! control's defaults. The reset functions then restore controls to their
//! empty state through the [`ControlLookup`] and [`form_state::ControlStore`]
//! seams, so either side can be swapped for a test double.

mod error;
mod index;
mod kind;
mod lookup;
mod reset;
mod seed;

pub use error::ResetError;
pub use index::FormControlIndex;
pub use kind::{ControlKind, control_kind, type_discriminator};
pub use lookup::{ControlLookup, ControlRef};
pub use reset::{reset_element_node, reset_element_node_by_id, reset_radio};
pub use seed::seed_control_state_from_dom;

use dom::Id;
use form_state::ControlId;

#[inline]
pub fn to_control_id(id: Id) -> ControlId {
    ControlId::from_raw(u64::from(id.0))
}

/// The node a control id was made from; `None` if it is out of node-id range.
#[inline]
pub fn from_control_id(id: ControlId) -> Option<Id> {
    u32::try_from(id.as_raw()).ok().map(Id)
}
