//! # formkit
//!
//! Build, seed and reset form controls over an in-memory DOM.
//!
//! [`FormDocument`] ties the member crates together: it owns a [`dom::Node`]
//! tree, the [`FormControlIndex`] derived from it and the live
//! [`ControlValueStore`]. The member crates stay usable on their own; the
//! reset functions in [`form_controls`] only need the
//! [`ControlLookup`]/[`ControlStore`](form_state::ControlStore) seams.
//!
//! ```
//! use formkit::{FormDocument, dom::Node};
//!
//! let input = Node::element(
//!     "input",
//!     vec![
//!         ("id".to_string(), Some("user".to_string())),
//!         ("value".to_string(), Some("alice".to_string())),
//!     ],
//!     Vec::new(),
//! );
//! let mut doc = FormDocument::new(Node::document(vec![input]));
//!
//! assert_eq!(doc.value("user"), Some("alice"));
//! doc.reset_element_node_by_id("user").unwrap();
//! assert_eq!(doc.value("user"), Some(""));
//! ```

mod document;
mod error;

pub use document::FormDocument;
pub use error::{Error, Result};

pub use dom;
pub use form_controls;
pub use form_state;
pub use strings;
pub use validation;

pub use dom::{BuildError, Id, Node, SelectOption};
pub use form_controls::{ControlKind, ControlLookup, ControlRef, FormControlIndex, ResetError};
pub use form_state::{ControlValueStore, NO_SELECTION, SelectedIndex};
pub use validation::{Scalar, ValidationError};
