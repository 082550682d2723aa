use crate::error::{Result, ValidationError};
use crate::scalar::Scalar;

/// Input element kinds accepted by [`valid_input_element_name`], lower-case.
pub const INPUT_ELEMENT_NAMES: &[&str] = &[
    "text", "password", "textarea", "radio", "checkbox", "select", "option", "file", "number",
    "range", "date", "time", "email", "url", "color",
];

/// Returns `name` (original casing) if it names a known input element kind.
///
/// The comparison is ASCII case-insensitive. The name must also be lexically
/// well formed: a letter followed by letters or digits, nothing else.
pub fn valid_input_element_name<'a>(name: impl Into<Scalar<'a>>) -> Result<&'a str> {
    let value = name.into();
    let Scalar::Str(name) = value else {
        return Err(ValidationError::UnknownControlKind {
            provided: value.to_string(),
        });
    };

    let lowered = name.to_ascii_lowercase();
    if is_element_name_lexeme(&lowered) && INPUT_ELEMENT_NAMES.contains(&lowered.as_str()) {
        Ok(name)
    } else {
        Err(ValidationError::UnknownControlKind {
            provided: name.to_string(),
        })
    }
}

// [a-z][a-z0-9]*
fn is_element_name_lexeme(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_lowercase() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allow_listed_name() {
        for name in INPUT_ELEMENT_NAMES {
            assert_eq!(valid_input_element_name(*name), Ok(*name));
        }
    }

    #[test]
    fn match_is_case_insensitive_and_returns_original_casing() {
        assert_eq!(valid_input_element_name("TEXT"), Ok("TEXT"));
        assert_eq!(valid_input_element_name("CheckBox"), Ok("CheckBox"));
    }

    #[test]
    fn rejects_malformed_names() {
        for name in ["foo-bar", " text", "text ", "", "1text", "tex t", "téxt"] {
            assert!(
                matches!(
                    valid_input_element_name(name),
                    Err(ValidationError::UnknownControlKind { .. })
                ),
                "{name:?}"
            );
        }
    }

    #[test]
    fn rejects_well_formed_names_outside_the_allow_list() {
        assert_eq!(
            valid_input_element_name("button"),
            Err(ValidationError::UnknownControlKind {
                provided: "button".to_string()
            })
        );
        assert!(valid_input_element_name("datetime").is_err());
    }

    #[test]
    fn rejects_non_strings() {
        assert_eq!(
            valid_input_element_name(5),
            Err(ValidationError::UnknownControlKind {
                provided: "5".to_string()
            })
        );
    }

    #[test]
    fn lexeme_check() {
        assert!(is_element_name_lexeme("h1"));
        assert!(!is_element_name_lexeme("H1"));
        assert!(!is_element_name_lexeme("_a"));
    }
}
