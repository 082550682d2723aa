//! Reset policies: put a control back to its "empty" state.
//!
//! | kind | reset to |
//! |---|---|
//! | text, password, textarea | `""` |
//! | select-one | index 0 |
//! | select-multiple | no selection |
//! | number | `"0"` |
//! | checkbox | unchecked |
//! | radio with a name | first member of the group checked |
//! | radio without a name | unchecked |
//! | anything else | untouched |
//!
//! Every policy is idempotent.

use crate::error::ResetError;
use crate::kind::ControlKind;
use crate::lookup::{ControlLookup, ControlRef};
use crate::to_control_id;
use dom::Id;
use form_state::{ControlStore, NO_SELECTION};

const LOG_TARGET: &str = "form_controls.reset";

/// Reset `control` according to its kind. Never fails; unknown kinds are left untouched.
pub fn reset_element_node<L, S>(lookup: &L, store: &mut S, control: &ControlRef<'_>)
where
    L: ControlLookup + ?Sized,
    S: ControlStore + ?Sized,
{
    let cid = to_control_id(control.id);

    match control.kind {
        ControlKind::Text | ControlKind::Password | ControlKind::MultilineText => {
            store.set_value(cid, "");
        }
        ControlKind::SingleSelect => {
            store.set_selected_index(cid, 0);
        }
        ControlKind::MultiSelect => {
            store.set_selected_index(cid, NO_SELECTION);
        }
        ControlKind::Numeric => {
            store.set_value(cid, "0");
        }
        ControlKind::Checkbox => {
            store.set_checked(cid, false);
        }
        ControlKind::Radio => match control.group_name.filter(|name| !name.is_empty()) {
            Some(name) => reset_radio(lookup, store, name),
            None => {
                store.set_checked(cid, false);
            }
        },
        ControlKind::Other => {
            log::trace!(target: LOG_TARGET, "{:?}: no reset policy, left untouched", control.id);
            return;
        }
    }

    log::debug!(target: LOG_TARGET, "reset {:?} ({:?})", control.id, control.kind);
}

/// Look the control up by its `id` attribute and reset it.
pub fn reset_element_node_by_id<L, S>(lookup: &L, store: &mut S, id: &str) -> Result<(), ResetError>
where
    L: ControlLookup + ?Sized,
    S: ControlStore + ?Sized,
{
    let control = lookup
        .lookup_by_id(id)
        .ok_or_else(|| ResetError::ControlNotFound { id: id.to_string() })?;
    reset_element_node(lookup, store, &control);
    Ok(())
}

/// Check the first member of radio group `group_name` and uncheck the rest.
///
/// An unknown or empty group is a no-op.
pub fn reset_radio<L, S>(lookup: &L, store: &mut S, group_name: &str)
where
    L: ControlLookup + ?Sized,
    S: ControlStore + ?Sized,
{
    let members: Vec<Id> = lookup
        .lookup_by_group_name(group_name)
        .iter()
        .map(|c| c.id)
        .collect();

    let Some(&first) = members.first() else {
        log::trace!(target: LOG_TARGET, "radio group {group_name:?} is empty");
        return;
    };

    let changed = check_exclusive(store, &members, first);
    log::debug!(
        target: LOG_TARGET,
        "reset radio group {group_name:?}: {first:?} checked of {} (changed={changed})",
        members.len()
    );
}

/// Check `target` and uncheck every other member. Returns `true` if anything changed.
fn check_exclusive<S: ControlStore + ?Sized>(store: &mut S, members: &[Id], target: Id) -> bool {
    let mut changed = false;
    for &id in members {
        changed |= store.set_checked(to_control_id(id), id == target);
    }
    changed
}
