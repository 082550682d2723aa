#![no_main]

use libfuzzer_sys::fuzz_target;
use validation::{
    ValidationError, valid_input_element_name, valid_number, valid_number_non_zero,
    valid_number_or_infinite, valid_string,
};

fuzz_target!(|data: &[u8]| {
    if data.len() >= 8 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&data[..8]);
        let n = f64::from_le_bytes(raw);

        match valid_number(n) {
            Ok(v) => assert!(v.is_finite() && v.to_bits() == n.to_bits()),
            Err(err) => assert!(matches!(err, ValidationError::InvalidNumber { .. })),
        }
        if let Ok(v) = valid_number_or_infinite(n) {
            assert!(v.is_finite() || v == f64::INFINITY);
        }
        if let Ok(v) = valid_number_non_zero(n) {
            assert!(v != 0.0);
        }
    }

    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Guards hand back their input untouched.
    if let Ok(out) = valid_string(s) {
        assert_eq!(out, s);
    }
    if let Ok(out) = valid_input_element_name(s) {
        assert_eq!(out, s);
        assert!(valid_string(out).is_ok());
    }
});
