use crate::kind::ControlKind;
use dom::Id;

/// A handle to one form control as seen by the reset logic.
///
/// The handle only names the control; its live state lives in a
/// [`form_state::ControlStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlRef<'a> {
    pub id: Id,
    pub kind: ControlKind,
    /// The control's `name` attribute, if present and non-empty.
    pub group_name: Option<&'a str>,
}

impl<'a> ControlRef<'a> {
    pub fn new(id: Id, kind: ControlKind, group_name: Option<&'a str>) -> Self {
        Self {
            id,
            kind,
            group_name: group_name.filter(|name| !name.is_empty()),
        }
    }
}

/// Document queries the reset logic needs.
///
/// [`FormControlIndex`](crate::FormControlIndex) answers them from a seeded
/// DOM; tests can answer them from a hand-built table.
pub trait ControlLookup {
    /// The control with node id `node`, if that node is a form control.
    fn control(&self, node: Id) -> Option<ControlRef<'_>>;

    /// The element whose `id` attribute is `id` (first in document order).
    ///
    /// Elements that are not form controls are returned with kind
    /// [`ControlKind::Other`].
    fn lookup_by_id(&self, id: &str) -> Option<ControlRef<'_>>;

    /// Every member of the exclusive-choice group `name`, in document order.
    fn lookup_by_group_name(&self, name: &str) -> Vec<ControlRef<'_>>;
}
