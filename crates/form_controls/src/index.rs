use crate::kind::ControlKind;
use crate::lookup::{ControlLookup, ControlRef};
use dom::Id;
use std::collections::HashMap;

/// Lookup tables over the form controls of one document, built by
/// [`seed_control_state_from_dom`](crate::seed_control_state_from_dom).
#[derive(Clone, Debug, Default)]
pub struct FormControlIndex {
    /// Controls in document order.
    controls: Vec<ControlEntry>,
    by_node: HashMap<Id, usize>,
    /// `id` attribute -> element, for every element (controls or not).
    by_id_attr: HashMap<String, Id>,
    pub(crate) radio: RadioGroupIndex,
}

#[derive(Clone, Debug)]
struct ControlEntry {
    id: Id,
    kind: ControlKind,
    group_name: Option<String>,
}

impl FormControlIndex {
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// All controls in document order.
    pub fn iter(&self) -> impl Iterator<Item = ControlRef<'_>> + '_ {
        self.controls.iter().map(ControlEntry::to_ref)
    }

    pub(crate) fn register_control(
        &mut self,
        id: Id,
        kind: ControlKind,
        group_name: Option<&str>,
    ) {
        if self.by_node.contains_key(&id) {
            return;
        }
        self.by_node.insert(id, self.controls.len());
        self.controls.push(ControlEntry {
            id,
            kind,
            group_name: group_name.filter(|n| !n.is_empty()).map(str::to_string),
        });
    }

    pub(crate) fn register_id_attr(&mut self, id_attr: &str, node: Id) {
        // getElementById semantics: the first element in document order wins.
        self.by_id_attr.entry(id_attr.to_string()).or_insert(node);
    }

    pub(crate) fn register_radio(&mut self, name: Option<&str>, radio_id: Id) -> Option<usize> {
        name.filter(|n| !n.is_empty())
            .map(|name| self.radio.register(name, radio_id))
    }
}

impl ControlEntry {
    fn to_ref(&self) -> ControlRef<'_> {
        ControlRef::new(self.id, self.kind, self.group_name.as_deref())
    }
}

impl ControlLookup for FormControlIndex {
    fn control(&self, node: Id) -> Option<ControlRef<'_>> {
        let idx = *self.by_node.get(&node)?;
        self.controls.get(idx).map(ControlEntry::to_ref)
    }

    fn lookup_by_id(&self, id: &str) -> Option<ControlRef<'_>> {
        let node = *self.by_id_attr.get(id)?;
        Some(
            self.control(node)
                .unwrap_or_else(|| ControlRef::new(node, ControlKind::Other, None)),
        )
    }

    fn lookup_by_group_name(&self, name: &str) -> Vec<ControlRef<'_>> {
        self.radio
            .members(name)
            .iter()
            .filter_map(|&id| self.control(id))
            .collect()
    }
}

/// Radio groups keyed by `name` across the whole document.
#[derive(Clone, Debug, Default)]
pub(crate) struct RadioGroupIndex {
    group_by_name: HashMap<String, usize>,
    group_by_radio: HashMap<Id, usize>,
    groups: Vec<Vec<Id>>,
}

impl RadioGroupIndex {
    fn ensure_group_id(&mut self, name: &str) -> usize {
        if let Some(id) = self.group_by_name.get(name) {
            return *id;
        }

        let id = self.groups.len();
        self.groups.push(Vec::new());
        self.group_by_name.insert(name.to_string(), id);
        id
    }

    pub(crate) fn register(&mut self, name: &str, radio_id: Id) -> usize {
        let group_id = self.ensure_group_id(name);

        // Map the radio -> group (last write wins). If the radio was previously in a different
        // group, remove it there so stale membership vectors cannot desync group resets.
        let prev = self.group_by_radio.insert(radio_id, group_id);

        if let Some(old_group) = prev.filter(|old| *old != group_id)
            && let Some(old_members) = self.groups.get_mut(old_group)
        {
            old_members.retain(|&id| id != radio_id);
        }

        if prev != Some(group_id)
            && let Some(members) = self.groups.get_mut(group_id)
        {
            members.push(radio_id);
        }
        group_id
    }

    pub(crate) fn members(&self, name: &str) -> &[Id] {
        self.group_by_name
            .get(name)
            .and_then(|&group_id| self.groups.get(group_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
