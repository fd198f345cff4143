//! Token-name transforms
//!
//! Both transforms are total functions of the input string: no token-name
//! registry, no reserved words, no failure path. `snake_case` is idempotent;
//! `lower_camel` leaves an already-lowerCamel name untouched.

/// `primaryColor` → `primary_color`, `Purple300` → `purple300`.
///
/// Inserts `_` before every internal uppercase letter, then lowercases the
/// whole identifier.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// `Purple300` → `purple300`, `primaryColor` → `primaryColor`.
///
/// Lowercases the first character only.
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_splits_on_internal_uppercase() {
        assert_eq!(snake_case("primaryColor"), "primary_color");
        assert_eq!(snake_case("primaryColorHover"), "primary_color_hover");
    }

    #[test]
    fn snake_case_leaves_flat_names_alone() {
        assert_eq!(snake_case("purple300"), "purple300");
        assert_eq!(snake_case("Purple300"), "purple300");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn snake_case_is_idempotent() {
        for name in ["primaryColor", "Purple300", "already_snake", "x"] {
            let once = snake_case(name);
            assert_eq!(snake_case(&once), once);
        }
    }

    #[test]
    fn lower_camel_lowers_only_the_first_character() {
        assert_eq!(lower_camel("Purple300"), "purple300");
        assert_eq!(lower_camel("primaryColor"), "primaryColor");
        assert_eq!(lower_camel("X"), "x");
        assert_eq!(lower_camel(""), "");
    }

    #[test]
    fn lower_camel_is_idempotent() {
        for name in ["Purple300", "primaryColor", "a"] {
            let once = lower_camel(name);
            assert_eq!(lower_camel(&once), once);
        }
    }
}
