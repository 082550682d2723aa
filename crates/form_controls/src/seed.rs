use crate::index::FormControlIndex;
use crate::kind::{ControlKind, control_kind};
use crate::to_control_id;
use dom::{Id, Node, collect_text};
use form_state::{ControlStore, NO_SELECTION, SelectedIndex};
use std::collections::HashMap;

/// Walk `dom` in document order, index every form control, and seed `store`
/// with each control's default state.
///
/// Controls the store already knows keep their live state, so re-seeding
/// after a DOM edit only initializes newly inserted controls.
pub fn seed_control_state_from_dom<S: ControlStore + ?Sized>(
    store: &mut S,
    dom: &Node,
) -> FormControlIndex {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum RadioGroupSelection {
        Locked(Id),
        Seeded(Id),
    }

    fn walk<S: ControlStore + ?Sized>(
        store: &mut S,
        node: &Node,
        index: &mut FormControlIndex,
        radio_groups: &mut HashMap<usize, RadioGroupSelection>,
    ) {
        if let Some(id_attr) = node.attr("id") {
            index.register_id_attr(id_attr, node.id());
        }

        let Some(kind) = control_kind(node) else {
            for c in node.children() {
                walk(store, c, index, radio_groups);
            }
            return;
        };

        let id = node.id();
        let cid = to_control_id(id);
        let already_present = store.has(cid);
        index.register_control(id, kind, node.attr("name"));
        log::trace!(target: "form_controls.seed", "control {id:?} kind={kind:?} known={already_present}");

        match kind {
            ControlKind::Checkbox => {
                if !already_present {
                    store.ensure_initial_checked(cid, node.has_attr("checked"));
                }
            }

            ControlKind::Radio => {
                let group_id = index.register_radio(node.attr("name"), id);

                if already_present {
                    let Some(group_id) = group_id else {
                        return;
                    };

                    if store.is_checked(cid) {
                        match radio_groups.get(&group_id).copied() {
                            Some(RadioGroupSelection::Seeded(prev)) => {
                                // User state wins over HTML default selection.
                                store.set_checked(to_control_id(prev), false);
                                radio_groups.insert(group_id, RadioGroupSelection::Locked(id));
                            }
                            Some(RadioGroupSelection::Locked(prev)) => {
                                // Keep the first observed locked selection to maintain exclusivity.
                                if prev != id {
                                    store.set_checked(cid, false);
                                }
                            }
                            None => {
                                radio_groups.insert(group_id, RadioGroupSelection::Locked(id));
                            }
                        }
                    }
                    return;
                }

                let wants_checked = node.has_attr("checked");
                store.ensure_initial_checked(cid, wants_checked);

                let Some(group_id) = group_id else {
                    return;
                };

                match radio_groups.get(&group_id).copied() {
                    Some(RadioGroupSelection::Locked(_)) => {
                        // Preserve existing (user) group selection over HTML defaults.
                        store.set_checked(cid, false);
                    }
                    Some(RadioGroupSelection::Seeded(prev)) => {
                        if wants_checked {
                            store.set_checked(to_control_id(prev), false);
                            radio_groups.insert(group_id, RadioGroupSelection::Seeded(id));
                        }
                    }
                    None => {
                        if wants_checked {
                            radio_groups.insert(group_id, RadioGroupSelection::Seeded(id));
                        }
                    }
                }
            }

            ControlKind::SingleSelect | ControlKind::MultiSelect => {
                if !already_present {
                    store.ensure_initial_selected(cid, initial_selected_index(node, kind));
                }
            }

            ControlKind::MultilineText => {
                if !already_present {
                    store.ensure_initial(cid, textarea_default_value(node));
                }
            }

            ControlKind::Text | ControlKind::Password | ControlKind::Numeric | ControlKind::Other => {
                if !already_present {
                    store.ensure_initial(cid, node.attr("value").unwrap_or("").to_string());
                }
            }
        }
    }

    let mut index = FormControlIndex::default();
    let mut radio_groups: HashMap<usize, RadioGroupSelection> = HashMap::new();
    walk(store, dom, &mut index, &mut radio_groups);

    log::debug!(target: "form_controls.seed", "indexed {} form control(s)", index.len());
    index
}

/// Selection a `<select>` starts with.
///
/// Single selects keep the last `selected` option (later ones deselect earlier
/// ones while parsing) and fall back to the first option. Multi selects report
/// their first `selected` option, or none. Options are the select's
/// `<option>` children and those of its `<optgroup>` children.
fn initial_selected_index(select: &Node, kind: ControlKind) -> SelectedIndex {
    let options: Vec<&Node> = select
        .children()
        .iter()
        .flat_map(|c| {
            if c.is_element("optgroup") {
                c.children()
            } else {
                std::slice::from_ref(c)
            }
        })
        .filter(|c| c.is_element("option"))
        .collect();

    let selected = match kind {
        ControlKind::MultiSelect => options.iter().position(|o| o.has_attr("selected")),
        _ => options
            .iter()
            .rposition(|o| o.has_attr("selected"))
            .or((!options.is_empty()).then_some(0)),
    };

    selected
        .and_then(|i| SelectedIndex::try_from(i).ok())
        .unwrap_or(NO_SELECTION)
}

fn textarea_default_value(node: &Node) -> String {
    let mut initial = String::new();
    collect_text(node.children(), &mut initial);
    let mut initial = normalize_textarea_newlines(&initial);

    // HTML textarea parsing: if the first character is a newline, strip it.
    if initial.starts_with('\n') {
        initial.remove(0);
    }
    initial
}

fn normalize_textarea_newlines(s: &str) -> String {
    // Normalize CRLF/CR to LF. (Browsers store textarea values with LF newlines.)
    if !s.contains('\r') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    out
}
