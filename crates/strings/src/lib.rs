//! Identifier builders that join validated parts in camelCase or snake_case.
//!
//! Every part must pass [`validation::valid_string`]; a blank or missing part
//! fails the whole call instead of producing a malformed identifier.

use validation::{Scalar, ValidationError, valid_string};

/// Join `parts` as camelCase: the first part verbatim, every later part with
/// its first character upper-cased.
///
/// ```
/// assert_eq!(strings::concat_camel_case(&["get", "user", "name"]).unwrap(), "getUserName");
/// ```
pub fn concat_camel_case(parts: &[&str]) -> Result<String, ValidationError> {
    let (first, rest) = split_first_validated(parts)?;

    let mut out = String::with_capacity(parts.iter().map(|p| p.len()).sum());
    out.push_str(first);
    for part in rest {
        let part = valid_string(*part)?;
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    Ok(out)
}

/// Join `parts` with `_`, keeping each part's casing.
pub fn concat_snake_case(parts: &[&str]) -> Result<String, ValidationError> {
    let (first, rest) = split_first_validated(parts)?;

    let mut out = String::with_capacity(parts.iter().map(|p| p.len() + 1).sum());
    out.push_str(first);
    for part in rest {
        out.push('_');
        out.push_str(valid_string(*part)?);
    }
    Ok(out)
}

/// [`concat_snake_case`], lower-cased.
pub fn concat_lower_snake_case(parts: &[&str]) -> Result<String, ValidationError> {
    concat_snake_case(parts).map(|s| s.to_lowercase())
}

fn split_first_validated<'a, 'b>(
    parts: &'b [&'a str],
) -> Result<(&'a str, &'b [&'a str]), ValidationError> {
    match parts.split_first() {
        Some((first, rest)) => Ok((valid_string(*first)?, rest)),
        None => Err(ValidationError::TypeMismatch {
            found: Scalar::Missing.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn camel_case_capitalizes_every_part_but_the_first() {
        assert_eq!(
            concat_camel_case(&["get", "user", "name"]).unwrap(),
            "getUserName"
        );
        assert_eq!(concat_camel_case(&["Already"]).unwrap(), "Already");
        assert_eq!(concat_camel_case(&["a", "ßig"]).unwrap(), "aSSig");
    }

    #[test]
    fn camel_case_keeps_inner_casing() {
        assert_eq!(concat_camel_case(&["x", "mLP"]).unwrap(), "xMLP");
    }

    #[test]
    fn snake_case_joins_with_underscores() {
        assert_eq!(
            concat_snake_case(&["Period", "Select"]).unwrap(),
            "Period_Select"
        );
        assert_eq!(
            concat_lower_snake_case(&["Get", "User"]).unwrap(),
            "get_user"
        );
    }

    #[test]
    fn blank_parts_fail_the_whole_call() {
        assert_eq!(
            concat_camel_case(&["a", " "]),
            Err(ValidationError::BlankString)
        );
        assert_eq!(
            concat_snake_case(&["", "b"]),
            Err(ValidationError::BlankString)
        );
    }

    #[test]
    fn no_parts_is_a_type_mismatch() {
        assert_eq!(
            concat_snake_case(&[]),
            Err(ValidationError::TypeMismatch { found: "undefined" })
        );
        assert!(concat_camel_case(&[]).is_err());
    }

    proptest! {
        #[test]
        fn prop_snake_case_has_one_separator_per_join(parts in proptest::collection::vec("[a-z]{1,8}", 1..6)) {
            let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
            let joined = concat_snake_case(&refs).unwrap();
            prop_assert_eq!(joined.matches('_').count(), parts.len() - 1);
            prop_assert_eq!(joined.split('_').collect::<Vec<_>>(), refs);
        }
    }
}
