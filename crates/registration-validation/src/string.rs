//! String validation functions

/// True when the value is empty. Whitespace counts as content, matching
/// how the form treats text inputs.
pub fn is_blank(s: &str) -> bool {
    s.is_empty()
}

/// Number of characters (Unicode scalar values) in the string
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

/// Validates string length, counted in characters, within `[min, max]`
pub fn length_within(s: &str, min: usize, max: usize) -> bool {
    let len = char_length(s);
    len >= min && len <= max
}

/// Equality validator used by cross-field rules
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Interprets a raw checkbox value the way an HTML form posts it
pub fn is_checked(raw: &str) -> bool {
    matches!(raw, "true" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abcdef", true)]
    #[case("abcdefghijklmnopqr", true)]
    #[case("abcde", false)]
    #[case("abcdefghijklmnopqrs", false)]
    #[case("", false)]
    fn test_length_within(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(length_within(value, 6, 18), expected);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // six characters, twelve bytes
        assert!(length_within("ÄÖÜäöü", 6, 18));
        assert_eq!(char_length("ÄÖÜäöü"), 6);
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(!is_blank(" "));
        assert!(!is_blank("x"));
    }

    #[test]
    fn test_equality() {
        assert!(equals("abc123", "abc123"));
        assert!(!equals("abc123", "abc124"));
        assert!(!equals("abc123", "ABC123"));
    }

    #[test]
    fn test_enum_variant() {
        let allowed = &["male", "female", "other"];
        assert!(is_one_of("male", allowed));
        assert!(is_one_of("other", allowed));
        assert!(!is_one_of("Male", allowed));
        assert!(!is_one_of("", allowed));
    }

    #[test]
    fn test_checkbox_values() {
        assert!(is_checked("true"));
        assert!(is_checked("on"));
        assert!(!is_checked("false"));
        assert!(!is_checked(""));
    }
}
