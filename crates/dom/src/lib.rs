//! In-memory DOM tree used by the form layer.
//!
//! Nodes are plain owned values; identity is the [`Id`] assigned by
//! [`assign_node_ids`]. Elements are found by node id ([`find_node_by_id`]) or
//! by `id` attribute ([`find_element_by_id_attr`], first in document order).

pub mod builder;
pub mod traverse;

mod error;
mod types;

pub use crate::builder::{
    SelectOption, clean_parent_element, create_container_with_label, create_element,
    initialize_select,
};
pub use crate::error::BuildError;
pub use crate::traverse::{
    assign_node_ids, collect_text, find_element_by_id_attr,
    find_node_by_id, find_node_by_id_mut, max_node_id,
};
pub use crate::types::{Attribute, Id, Node, NodeId};
