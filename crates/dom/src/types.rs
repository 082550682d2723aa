pub type NodeId = u32;

/// Node identifier, unique within one tree. `Id(0)` marks a node that has not
/// been assigned an id yet (see [`crate::traverse::assign_node_ids`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    pub const UNASSIGNED: Id = Id(0);
}

pub type Attribute = (String, Option<String>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn document(children: Vec<Node>) -> Node {
        Node::Document {
            id: Id::UNASSIGNED,
            children,
        }
    }

    pub fn element(name: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
        Node::Element {
            id: Id::UNASSIGNED,
            name: name.into(),
            attributes,
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Node {
        Node::Text {
            id: Id::UNASSIGNED,
            text: text.into(),
        }
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn set_id(&mut self, new_id: Id) {
        match self {
            Node::Document { id, .. } => *id = new_id,
            Node::Element { id, .. } => *id = new_id,
            Node::Text { id, .. } => *id = new_id,
            Node::Comment { id, .. } => *id = new_id,
        }
    }

    /// Tag name for elements, `None` for every other node.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_element(&self, tag: &str) -> bool {
        self.tag_name().is_some_and(|n| n.eq_ignore_ascii_case(tag))
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } => Some(children),
            Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Value of the first attribute called `name` (ASCII case-insensitive).
    ///
    /// Valueless attributes (`<input checked>`) yield `None`; use [`Node::has_attr`]
    /// to test for presence.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
            }
            _ => false,
        }
    }

    /// Set (or overwrite) an attribute. No-op on non-element nodes.
    pub fn set_attr(&mut self, name: &str, value: Option<String>) {
        let Node::Element { attributes, .. } = self else {
            return;
        };
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value,
            None => attributes.push((name.to_string(), value)),
        }
    }
}
