#![no_main]

use dom::{Node, assign_node_ids};
use form_controls::{ControlLookup, reset_element_node, reset_radio, seed_control_state_from_dom};
use form_state::ControlValueStore;
use libfuzzer_sys::fuzz_target;

const TYPES: &[&str] = &["text", "password", "number", "checkbox", "radio", "date", "bogus"];

// Each byte picks a control; resetting everything twice must be stable.
fuzz_target!(|data: &[u8]| {
    let children = data
        .iter()
        .take(64)
        .map(|&b| {
            let ty = TYPES[usize::from(b) % TYPES.len()];
            let mut attrs = vec![("type".to_string(), Some(ty.to_string()))];
            if b & 0x10 != 0 {
                attrs.push(("name".to_string(), Some(format!("g{}", b >> 6))));
            }
            if b & 0x20 != 0 {
                attrs.push(("checked".to_string(), None));
            }
            Node::element("input", attrs, Vec::new())
        })
        .collect();
    let mut dom = Node::document(children);
    assign_node_ids(&mut dom);

    let mut store = ControlValueStore::new();
    let index = seed_control_state_from_dom(&mut store, &dom);

    let controls: Vec<_> = index.iter().collect();
    for c in &controls {
        reset_element_node(&index, &mut store, c);
    }
    let once = store.clone();
    for c in &controls {
        reset_element_node(&index, &mut store, c);
    }
    reset_radio(&index, &mut store, "g9");

    for c in &controls {
        let id = form_controls::to_control_id(c.id);
        assert_eq!(store.get(id), once.get(id));
        assert_eq!(store.is_checked(id), once.is_checked(id));
        assert!(index.control(c.id).is_some());
    }
});
