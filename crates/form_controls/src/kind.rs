use dom::Node;

/// The kinds of form control the reset policies know about.
///
/// Anything else a control can be (`file`, `date`, `email`, ...) is
/// [`ControlKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Text,
    Password,
    MultilineText,
    SingleSelect,
    MultiSelect,
    Numeric,
    Checkbox,
    Radio,
    Other,
}

impl ControlKind {
    /// Map a DOM `type` discriminator (`"select-one"`, `"textarea"`, ...) to a kind.
    ///
    /// Total: unknown discriminators map to [`ControlKind::Other`].
    pub fn from_type(discriminator: &str) -> ControlKind {
        const TABLE: &[(&str, ControlKind)] = &[
            ("text", ControlKind::Text),
            ("password", ControlKind::Password),
            ("textarea", ControlKind::MultilineText),
            ("select-one", ControlKind::SingleSelect),
            ("select-multiple", ControlKind::MultiSelect),
            ("number", ControlKind::Numeric),
            ("checkbox", ControlKind::Checkbox),
            ("radio", ControlKind::Radio),
        ];

        TABLE
            .iter()
            .find(|(ty, _)| ty.eq_ignore_ascii_case(discriminator))
            .map_or(ControlKind::Other, |(_, kind)| *kind)
    }
}

// Input types a browser keeps as-is; anything else falls back to "text".
const INPUT_TYPES: &[&str] = &[
    "hidden",
    "text",
    "search",
    "tel",
    "url",
    "email",
    "password",
    "date",
    "month",
    "week",
    "time",
    "datetime-local",
    "number",
    "range",
    "color",
    "checkbox",
    "radio",
    "file",
    "submit",
    "image",
    "reset",
    "button",
];

/// The DOM `type` discriminator of a form control element.
///
/// `<input>` reports its `type` attribute (missing or unknown means `text`),
/// `<textarea>` reports `textarea`, `<select>` reports `select-multiple` or
/// `select-one`. Every other node is not a form control and yields `None`.
pub fn type_discriminator(node: &Node) -> Option<&'static str> {
    let name = node.tag_name()?;

    if name.eq_ignore_ascii_case("input") {
        let ty = node.attr("type").map(str::trim).unwrap_or("");
        let known = INPUT_TYPES
            .iter()
            .find(|known| known.eq_ignore_ascii_case(ty))
            .copied();
        return Some(known.unwrap_or("text")); // missing/invalid type defaults to text
    }
    if name.eq_ignore_ascii_case("textarea") {
        return Some("textarea");
    }
    if name.eq_ignore_ascii_case("select") {
        return Some(if node.has_attr("multiple") {
            "select-multiple"
        } else {
            "select-one"
        });
    }
    None
}

/// Classify a node; `None` if it is not a form control at all.
pub fn control_kind(node: &Node) -> Option<ControlKind> {
    type_discriminator(node).map(ControlKind::from_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(name: &str, attrs: &[(&str, Option<&str>)]) -> Node {
        Node::element(
            name,
            attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
            Vec::new(),
        )
    }

    #[test]
    fn known_discriminators_map_to_their_kind() {
        for (ty, kind) in [
            ("text", ControlKind::Text),
            ("password", ControlKind::Password),
            ("textarea", ControlKind::MultilineText),
            ("select-one", ControlKind::SingleSelect),
            ("select-multiple", ControlKind::MultiSelect),
            ("number", ControlKind::Numeric),
            ("checkbox", ControlKind::Checkbox),
            ("RADIO", ControlKind::Radio),
        ] {
            assert_eq!(ControlKind::from_type(ty), kind);
        }
    }

    #[test]
    fn unknown_discriminators_are_other() {
        assert_eq!(ControlKind::from_type("file"), ControlKind::Other);
        assert_eq!(ControlKind::from_type(""), ControlKind::Other);
        assert_eq!(ControlKind::from_type("select"), ControlKind::Other);
    }

    #[test]
    fn input_type_defaults_to_text() {
        assert_eq!(type_discriminator(&el("input", &[])), Some("text"));
        assert_eq!(
            type_discriminator(&el("input", &[("type", Some("  "))])),
            Some("text")
        );
        assert_eq!(
            type_discriminator(&el("input", &[("type", Some("bogus"))])),
            Some("text")
        );
        assert_eq!(
            type_discriminator(&el("INPUT", &[("TYPE", Some("Radio"))])),
            Some("radio")
        );
    }

    #[test]
    fn known_non_reset_input_types_are_other() {
        let node = el("input", &[("type", Some("date"))]);
        assert_eq!(type_discriminator(&node), Some("date"));
        assert_eq!(control_kind(&node), Some(ControlKind::Other));
    }

    #[test]
    fn textarea_and_select_are_classified_by_element() {
        assert_eq!(
            control_kind(&el("textarea", &[])),
            Some(ControlKind::MultilineText)
        );
        assert_eq!(
            control_kind(&el("select", &[])),
            Some(ControlKind::SingleSelect)
        );
        assert_eq!(
            control_kind(&el("select", &[("multiple", None)])),
            Some(ControlKind::MultiSelect)
        );
    }

    #[test]
    fn non_controls_are_not_classified() {
        assert_eq!(control_kind(&el("div", &[("type", Some("text"))])), None);
        assert_eq!(control_kind(&Node::text("input")), None);
    }
}
