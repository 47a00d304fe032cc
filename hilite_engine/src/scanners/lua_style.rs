//! Lua-family character scanners
//!
//! Lua strings come in three forms (single-quoted, double-quoted, and
//! `[[ … ]]` long brackets) and Lua numbers have no hex/binary branches or
//! size suffixes, so the family gets its own scanners. The punctuation set
//! additionally contains `#` (the length operator).
use super::{is_identifier_continue, is_identifier_start, ScanMatch};
use crate::keywords::KeywordSet;

/// Recognize a Lua string: `'…'`, `"…"`, or `[[…]]`. Backslash escapes only
/// apply inside the quoted forms; long-bracket strings end at the first
/// `]]`.
pub fn scan_string(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    let mut single_quote = false;
    let mut double_quote = false;
    let mut long_bracket = false;
    let mut p = 0;

    match input.first() {
        Some(b'\'') => single_quote = true,
        Some(b'"') => double_quote = true,
        Some(b'[') => {
            p += 1;
            if input.get(p) == Some(&b'[') {
                long_bracket = true;
            }
        }
        _ => {}
    }

    if !(single_quote || double_quote || long_bracket) {
        return None;
    }

    p += 1;
    while p < input.len() {
        // end of string
        if (single_quote && input[p] == b'\'')
            || (double_quote && input[p] == b'"')
            || (long_bracket && input[p] == b']' && input.get(p + 1) == Some(&b']'))
        {
            let end = if long_bracket { p + 2 } else { p + 1 };
            return Some(ScanMatch::to(end));
        }

        // escape character inside quoted forms
        if input[p] == b'\\' && p + 1 < input.len() && (single_quote || double_quote) {
            p += 1;
        }

        p += 1;
    }

    None
}

/// Recognize `[A-Za-z_][A-Za-z0-9_]*`.
pub fn scan_identifier(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    if input.is_empty() || !is_identifier_start(input[0]) {
        return None;
    }

    let mut p = 1;
    while p < input.len() && is_identifier_continue(input[p]) {
        p += 1;
    }

    Some(ScanMatch::to(p))
}

/// Recognize a Lua numeric literal: optional sign, digits, optional
/// fractional part, optional exponent that must carry digits.
pub fn scan_number(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    if input.is_empty() {
        return None;
    }

    let starts_with_digit = input[0].is_ascii_digit();
    if input[0] != b'+' && input[0] != b'-' && !starts_with_digit {
        return None;
    }

    let mut p = 1;
    let mut has_digit = starts_with_digit;

    while p < input.len() && input[p].is_ascii_digit() {
        has_digit = true;
        p += 1;
    }

    if !has_digit {
        return None;
    }

    if p < input.len() && input[p] == b'.' {
        p += 1;
        while p < input.len() && input[p].is_ascii_digit() {
            p += 1;
        }
    }

    // floating point exponent
    if p < input.len() && (input[p] == b'e' || input[p] == b'E') {
        p += 1;

        if p < input.len() && (input[p] == b'+' || input[p] == b'-') {
            p += 1;
        }

        let mut has_exponent_digits = false;
        while p < input.len() && input[p].is_ascii_digit() {
            has_exponent_digits = true;
            p += 1;
        }

        if !has_exponent_digits {
            return None;
        }
    }

    Some(ScanMatch::to(p))
}

/// Recognize one punctuation character from the Lua set (includes `#`).
pub fn scan_punctuation(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    match input.first() {
        Some(
            b'[' | b']' | b'{' | b'}' | b'!' | b'%' | b'#' | b'^' | b'&' | b'*' | b'(' | b')'
            | b'-' | b'+' | b'=' | b'~' | b'|' | b'<' | b'>' | b'?' | b':' | b'/' | b';' | b','
            | b'.',
        ) => Some(ScanMatch::to(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_keywords() -> KeywordSet {
        KeywordSet::new(true)
    }

    #[test]
    fn quoted_strings_both_kinds() {
        let m = scan_string(b"'hello' x", &no_keywords()).unwrap();
        assert_eq!(m.end, 7);
        let m = scan_string(br#""hi\"there""#, &no_keywords()).unwrap();
        assert_eq!(m.end, 11);
    }

    #[test]
    fn long_bracket_string_ends_at_double_bracket() {
        let m = scan_string(b"[[multi ]line]] tail", &no_keywords()).unwrap();
        assert_eq!(m.end, 15);
        // a single bracket is not a string opener
        assert!(scan_string(b"[1]", &no_keywords()).is_none());
    }

    #[test]
    fn unterminated_long_bracket_fails() {
        assert!(scan_string(b"[[never closed", &no_keywords()).is_none());
    }

    #[test]
    fn number_has_no_hex_branch() {
        // "0x1A" scans as "0" with the 'x' left for the identifier scanner
        let m = scan_number(b"0x1A", &no_keywords()).unwrap();
        assert_eq!(m.end, 1);
    }

    #[test]
    fn number_exponent_requires_digits() {
        let m = scan_number(b"1.5e3", &no_keywords()).unwrap();
        assert_eq!(m.end, 5);
        assert!(scan_number(b"2e", &no_keywords()).is_none());
    }

    #[test]
    fn punctuation_includes_length_operator() {
        let m = scan_punctuation(b"#t", &no_keywords()).unwrap();
        assert_eq!(m.end, 1);
    }
}
