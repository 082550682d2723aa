use crate::error::{Result, ValidationError};
use crate::scalar::Scalar;

/// Returns `s` unchanged if it is a string with at least one non-whitespace character.
///
/// Surrounding whitespace is preserved: `"  a  "` passes through verbatim.
pub fn valid_string<'a>(s: impl Into<Scalar<'a>>) -> Result<&'a str> {
    match s.into() {
        Scalar::Str(s) if is_blank(s) => Err(ValidationError::BlankString),
        Scalar::Str(s) => Ok(s),
        other => Err(ValidationError::TypeMismatch {
            found: other.type_name(),
        }),
    }
}

/// `true` for the empty string and for strings made only of whitespace.
///
/// Whitespace is Unicode `White_Space` plus the byte order mark (U+FEFF).
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_non_strings_with_their_type() {
        assert_eq!(
            valid_string(12),
            Err(ValidationError::TypeMismatch { found: "number" })
        );
        assert_eq!(
            valid_string(false),
            Err(ValidationError::TypeMismatch { found: "boolean" })
        );
        assert_eq!(
            valid_string(None::<&str>),
            Err(ValidationError::TypeMismatch { found: "null" })
        );
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        for s in ["", " ", "\t\n", "\u{00A0}\u{2003}"] {
            assert_eq!(valid_string(s), Err(ValidationError::BlankString), "{s:?}");
        }
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(valid_string("\u{FEFF}"), Err(ValidationError::BlankString));
        assert_eq!(valid_string(" \u{FEFF}\t"), Err(ValidationError::BlankString));
        assert_eq!(valid_string("\u{FEFF}id"), Ok("\u{FEFF}id"));
    }

    #[test]
    fn keeps_padding_of_non_blank_strings() {
        assert_eq!(valid_string("  a  "), Ok("  a  "));
        assert_eq!(valid_string("\nabc"), Ok("\nabc"));
    }

    #[test]
    fn accepts_owned_strings_by_reference() {
        let owned = String::from("name");
        assert_eq!(valid_string(&owned), Ok("name"));
    }

    proptest! {
        #[test]
        fn prop_whitespace_only_is_blank(s in "[ \t\r\n\u{000B}\u{000C}]*") {
            prop_assert_eq!(valid_string(s.as_str()), Err(ValidationError::BlankString));
        }

        #[test]
        fn prop_non_blank_passes_verbatim(
            pad_l in "[ \t]{0,3}",
            core in "[a-zA-Z0-9_.-]{1,12}",
            pad_r in "[ \t]{0,3}",
        ) {
            let s = format!("{pad_l}{core}{pad_r}");
            prop_assert_eq!(valid_string(s.as_str()), Ok(s.as_str()));
        }
    }
}
