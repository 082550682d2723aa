use crate::{Id, Node};

/// Give every node still carrying [`Id::UNASSIGNED`] a fresh id.
///
/// Fresh ids continue after the largest id already present, so running this
/// again after inserting new subtrees never reuses an id.
pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id::UNASSIGNED {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = max_node_id(root).0.wrapping_add(1);
    walk(root, &mut next);
}

pub fn max_node_id(node: &Node) -> Id {
    node.children()
        .iter()
        .map(max_node_id)
        .fold(node.id(), Id::max)
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|c| find_node_by_id_mut(c, id))
}

/// First element in document order whose `id` attribute equals `id_attr`.
pub fn find_element_by_id_attr<'a>(node: &'a Node, id_attr: &str) -> Option<&'a Node> {
    if matches!(node, Node::Element { .. }) && node.attr("id") == Some(id_attr) {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_element_by_id_attr(c, id_attr))
}

/// Concatenated text of all descendant text nodes.
pub fn collect_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } | Node::Document { children, .. } => {
                collect_text(children, out);
            }
            Node::Comment { .. } => {}
        }
    }
}
