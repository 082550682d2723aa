#![no_main]

use libfuzzer_sys::fuzz_target;
use strings::{concat_camel_case, concat_lower_snake_case, concat_snake_case};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let parts: Vec<&str> = s.split('\u{0}').collect();

    let _ = concat_camel_case(&parts);
    if let Ok(joined) = concat_snake_case(&parts) {
        assert!(joined.len() >= parts.len() - 1);
        assert_eq!(concat_lower_snake_case(&parts).ok(), Some(joined.to_lowercase()));
    }
});
