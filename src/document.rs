use crate::error::{Error, Result};
use dom::{BuildError, Id, Node, SelectOption};
use form_controls::{
    ControlLookup, ControlRef, FormControlIndex, ResetError, from_control_id,
    seed_control_state_from_dom, to_control_id,
};
use form_state::{ControlId, ControlValueStore, SelectedIndex};

/// A DOM tree together with the live state of its form controls.
#[derive(Clone, Debug)]
pub struct FormDocument {
    root: Node,
    index: FormControlIndex,
    store: ControlValueStore,
}

impl FormDocument {
    /// Number the tree and seed every control with its default state.
    pub fn new(mut root: Node) -> Self {
        dom::assign_node_ids(&mut root);
        let mut store = ControlValueStore::new();
        let index = seed_control_state_from_dom(&mut store, &root);
        Self { root, index, store }
    }

    /// Re-index after a DOM edit.
    ///
    /// New nodes get ids and default state; controls that are still present
    /// keep their live state; state of removed controls is dropped.
    pub fn refresh(&mut self) {
        dom::assign_node_ids(&mut self.root);
        self.index = seed_control_state_from_dom(&mut self.store, &self.root);

        let index = &self.index;
        self.store
            .retain(|id| from_control_id(id).is_some_and(|node| index.control(node).is_some()));
    }

    pub fn dom(&self) -> &Node {
        &self.root
    }

    pub fn index(&self) -> &FormControlIndex {
        &self.index
    }

    pub fn store(&self) -> &ControlValueStore {
        &self.store
    }

    /// Direct access to live control state, e.g. to simulate user input.
    pub fn store_mut(&mut self) -> &mut ControlValueStore {
        &mut self.store
    }

    /// Run `edit` against the tree, then [`refresh`](Self::refresh).
    pub fn edit<R>(&mut self, edit: impl FnOnce(&mut Node) -> R) -> R {
        let out = edit(&mut self.root);
        self.refresh();
        out
    }

    /// Append `child` under the node `parent` and return the child's new id.
    pub fn append_child(&mut self, parent: Id, child: Node) -> Result<Id> {
        let parent_node =
            dom::find_node_by_id_mut(&mut self.root, parent).ok_or(Error::NodeNotFound(parent))?;
        let children = parent_node
            .children_mut()
            .ok_or(BuildError::NotAnElement { id: parent })?;
        children.push(child);
        let slot = children.len() - 1;

        self.refresh();

        dom::find_node_by_id(&self.root, parent)
            .and_then(|p| p.children().get(slot))
            .map(Node::id)
            .ok_or(Error::NodeNotFound(parent))
    }

    /// Replace the options of the `<select>` with `id` attribute `select_id`.
    ///
    /// The select's selection is re-seeded from the new options.
    pub fn initialize_select(&mut self, select_id: &str, options: &[SelectOption]) -> Result<()> {
        let node = self.element_by_id_attr(select_id)?;
        let select = dom::find_node_by_id_mut(&mut self.root, node).ok_or(Error::NodeNotFound(node))?;
        dom::initialize_select(options, select)?;

        self.store.remove(to_control_id(node));
        self.refresh();
        Ok(())
    }

    /// Remove every child of the element with `id` attribute `id`.
    pub fn clean_element(&mut self, id: &str) -> Result<usize> {
        let node = self.element_by_id_attr(id)?;
        let removed = self.edit(|root| {
            dom::find_node_by_id_mut(root, node).map_or(0, dom::clean_parent_element)
        });
        Ok(removed)
    }

    // ---------------------------------------------------------------------
    // Control state by `id` attribute
    // ---------------------------------------------------------------------

    pub fn control(&self, id: &str) -> Option<ControlRef<'_>> {
        self.index.lookup_by_id(id)
    }

    pub fn control_id(&self, id: &str) -> Option<ControlId> {
        self.control(id).map(|c| to_control_id(c.id))
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.store.get(self.control_id(id)?)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.control_id(id)
            .is_some_and(|cid| self.store.is_checked(cid))
    }

    pub fn selected_index(&self, id: &str) -> Option<SelectedIndex> {
        self.store.selected_index(self.control_id(id)?)
    }

    // ---------------------------------------------------------------------
    // Reset
    // ---------------------------------------------------------------------

    /// Reset the control with node id `node`. Nodes that are not form controls are ignored.
    pub fn reset_element_node(&mut self, node: Id) {
        if let Some(control) = self.index.control(node) {
            form_controls::reset_element_node(&self.index, &mut self.store, &control);
        }
    }

    pub fn reset_element_node_by_id(&mut self, id: &str) -> std::result::Result<(), ResetError> {
        form_controls::reset_element_node_by_id(&self.index, &mut self.store, id)
    }

    pub fn reset_radio(&mut self, group_name: &str) {
        form_controls::reset_radio(&self.index, &mut self.store, group_name);
    }

    fn element_by_id_attr(&self, id: &str) -> Result<Id> {
        dom::find_element_by_id_attr(&self.root, id)
            .map(Node::id)
            .ok_or_else(|| Error::ElementNotFound(id.to_string()))
    }
}
