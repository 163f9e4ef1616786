//! Identifier sanitization for the target netlist naming convention.
//!
//! Raw parameter values coming out of the source netlist may contain
//! characters that the output format cannot carry inside a model name.
//! [`sanitize`] rewrites them into a safe form without touching the
//! caller's storage.

/// Characters the target identifier grammar rejects.
///
/// Only spaces have caused problems in practice; everything else passes
/// through unchanged.
const INVALID_CHARS: &[char] = &[' '];

/// The character substituted for every invalid character.
const REPLACEMENT: char = '_';

/// Returns a copy of `text` with every invalid identifier character replaced by `_`.
///
/// Total over all inputs: the empty string maps to the empty string, and a
/// string with no invalid characters is returned unchanged.
///
/// ```
/// use vqm_common::sanitize;
///
/// assert_eq!(sanitize("dual port"), "dual_port");
/// assert_eq!(sanitize("single_port"), "single_port");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if is_invalid(c) { REPLACEMENT } else { c })
        .collect()
}

/// Returns `true` if `text` needs no sanitization.
pub fn is_valid_identifier(text: &str) -> bool {
    !text.chars().any(is_invalid)
}

fn is_invalid(c: char) -> bool {
    INVALID_CHARS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces() {
        assert_eq!(sanitize("dual port"), "dual_port");
        assert_eq!(sanitize("  a b  "), "__a_b__");
    }

    #[test]
    fn empty_string_is_identity() {
        assert_eq!(sanitize(""), "");
        assert!(is_valid_identifier(""));
    }

    #[test]
    fn no_spaces_is_identity() {
        for s in ["single_port", "bidir_dual_port", "a.b{c}", "x[3]", "\ttab"] {
            assert_eq!(sanitize(s), s);
            assert!(is_valid_identifier(s));
        }
    }

    #[test]
    fn only_spaces_are_rewritten() {
        // Other whitespace is left alone.
        assert_eq!(sanitize("a\tb c\nd"), "a\tb_c\nd");
    }

    #[test]
    fn source_is_not_mutated() {
        let raw = String::from("dual port");
        let clean = sanitize(&raw);
        assert_eq!(raw, "dual port");
        assert_eq!(clean, "dual_port");
    }

    #[test]
    fn multibyte_characters_pass_through() {
        assert_eq!(sanitize("µ mode"), "µ_mode");
    }

    #[test]
    fn validity_check() {
        assert!(!is_valid_identifier("dual port"));
        assert!(is_valid_identifier("dual_port"));
    }
}
