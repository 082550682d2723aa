//! Element construction helpers for form markup.
//!
//! Every caller-provided string that ends up as a tag or class name goes
//! through [`validation::valid_string`] first. Built nodes carry
//! [`Id::UNASSIGNED`](crate::Id::UNASSIGNED) until the tree they are inserted
//! into is renumbered with [`assign_node_ids`](crate::assign_node_ids).

use crate::error::BuildError;
use crate::types::{Attribute, Node};
use validation::valid_string;

/// One `<option>` for [`initialize_select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Build an element with the given attributes, classes and text content.
///
/// Classes are appended to any `class` attribute already present in
/// `attributes`. An empty `inner_text` produces no child.
pub fn create_element(
    tag: &str,
    attributes: Vec<Attribute>,
    class_list: &[&str],
    inner_text: &str,
) -> Result<Node, BuildError> {
    let tag = valid_string(tag)?;

    let mut classes = Vec::with_capacity(class_list.len());
    for class in class_list {
        classes.push(valid_string(*class)?);
    }

    let mut node = Node::element(tag, attributes, Vec::new());
    if !classes.is_empty() {
        let merged = match node.attr("class").filter(|c| !c.trim().is_empty()) {
            Some(existing) => format!("{existing} {}", classes.join(" ")),
            None => classes.join(" "),
        };
        node.set_attr("class", Some(merged));
    }

    if !inner_text.is_empty()
        && let Some(children) = node.children_mut()
    {
        children.push(Node::text(inner_text));
    }

    log::trace!(target: "dom.build", "created <{tag}> with {} class(es)", classes.len());
    Ok(node)
}

/// A `<div>` carrying `class_list` that holds a `<label for=input_field_id>`.
pub fn create_container_with_label(
    label_text: &str,
    input_field_id: &str,
    class_list: &[&str],
) -> Result<Node, BuildError> {
    let mut container = create_element("div", Vec::new(), class_list, "")?;
    let mut label = create_element("label", Vec::new(), &[], label_text)?;
    label.set_attr("for", Some(input_field_id.to_string()));

    if let Some(children) = container.children_mut() {
        children.push(label);
    }
    Ok(container)
}

/// Replace the children of `select` with one `<option>` per entry of `options`.
pub fn initialize_select(options: &[SelectOption], select: &mut Node) -> Result<(), BuildError> {
    if !matches!(select, Node::Element { .. }) {
        return Err(BuildError::NotAnElement { id: select.id() });
    }

    let mut built = Vec::with_capacity(options.len());
    for SelectOption { text, value } in options {
        built.push(create_element(
            "option",
            vec![("value".to_string(), Some(value.clone()))],
            &[],
            text,
        )?);
    }

    clean_parent_element(select);
    if let Some(children) = select.children_mut() {
        children.extend(built);
    }
    Ok(())
}

/// Drop every child of `parent`, returning how many were removed.
pub fn clean_parent_element(parent: &mut Node) -> usize {
    parent.children_mut().map_or(0, |children| {
        let removed = children.len();
        children.clear();
        removed
    })
}
