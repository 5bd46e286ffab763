//! Character-class predicates for the scanner.
//!
//! These replace regex-based classification with explicit byte checks so
//! the accepted language is exactly what is written here, with no dialect
//! surprises around escapes or word boundaries.

/// First byte of an identifier: an ASCII letter, `$`, or `_`.
pub(crate) fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'$' || byte == b'_'
}

/// Continuation byte of an identifier: start bytes plus ASCII digits.
pub(crate) fn is_identifier_part(byte: u8) -> bool {
    is_identifier_start(byte) || byte.is_ascii_digit()
}

/// Check whether `token` is a well-formed identifier.
///
/// An identifier starts with an ASCII letter, `$`, or `_` and continues
/// with letters, digits, `$`, or `_`. The empty string is not an
/// identifier.
///
/// ```rust
/// assert!(skein_scan::is_identifier("require"));
/// assert!(skein_scan::is_identifier("$_ref2"));
/// assert!(!skein_scan::is_identifier("2fast"));
/// assert!(!skein_scan::is_identifier(""));
/// assert!(!skein_scan::is_identifier("foo-bar"));
/// ```
pub fn is_identifier(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            is_identifier_start(*first) && rest.iter().copied().all(is_identifier_part)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letter_dollar_underscore_starts() {
        assert!(is_identifier("a"));
        assert!(is_identifier("Z"));
        assert!(is_identifier("$"));
        assert!(is_identifier("_"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$jquery"));
    }

    #[test]
    fn accepts_digits_after_first_char() {
        assert!(is_identifier("v8"));
        assert!(is_identifier("base64_decode"));
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(!is_identifier("8track"));
        assert!(!is_identifier("0"));
    }

    #[test]
    fn rejects_empty_and_punctuated() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("foo.bar"));
        assert!(!is_identifier("foo bar"));
        assert!(!is_identifier("café"));
    }
}
