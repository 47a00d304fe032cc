//! C-family character scanners
//!
//! These implement the hand-written recognizers shared by C, C++, Rust and
//! JavaScript: quoted strings with escaped-quote lookahead, character
//! literals, identifiers, the call-site function-name heuristic, the full
//! numeric-literal grammar, and single-character punctuation.
use super::{is_blank, is_identifier_continue, is_identifier_start, ScanMatch};
use crate::keywords::KeywordSet;

/// Recognize a double-quoted string literal.
///
/// A backslash immediately before a closing quote keeps the string open;
/// other escape sequences are skipped as ordinary content. An unterminated
/// string fails the scan entirely so lower-priority scanners classify the
/// ragged tail.
pub fn scan_string(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    if input.first() != Some(&b'"') {
        return None;
    }

    let mut p = 1;
    while p < input.len() {
        // end of string
        if input[p] == b'"' {
            return Some(ScanMatch::to(p + 1));
        }

        // escaped closing quote
        if input[p] == b'\\' && p + 1 < input.len() && input[p + 1] == b'"' {
            p += 1;
        }

        p += 1;
    }

    None
}

/// Recognize a single-quoted character literal: exactly one escape or one
/// literal character between the quotes.
pub fn scan_char_literal(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    if input.first() != Some(&b'\'') {
        return None;
    }

    let mut p = 1;
    if p < input.len() && input[p] == b'\\' {
        p += 1;
    }
    if p < input.len() {
        p += 1;
    }

    if p < input.len() && input[p] == b'\'' {
        return Some(ScanMatch::to(p + 1));
    }

    None
}

/// Recognize `[A-Za-z_][A-Za-z0-9_]*`. Casing is the keyword lookup's
/// concern, not the scanner's.
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

/// Recognize an identifier used as a call site: an identifier-shaped token
/// that is not a keyword and is followed, after optional blanks, by `(`.
/// The match covers only the identifier itself.
pub fn scan_function_name(input: &[u8], keywords: &KeywordSet) -> Option<ScanMatch> {
    if input.is_empty() || !is_identifier_start(input[0]) {
        return None;
    }

    let mut p = 1;
    while p < input.len() && is_identifier_continue(input[p]) {
        p += 1;
    }

    if keywords.contains_bytes(&input[..p]) {
        return None;
    }

    let mut q = p;
    while q < input.len() && is_blank(input[q]) {
        q += 1;
    }

    if q < input.len() && input[q] == b'(' {
        return Some(ScanMatch::to(p));
    }

    None
}

/// Recognize a numeric literal: optional sign, decimal digits, then one of
/// a fractional part, a hex (`0x…`) run, or a binary (`0b…`) run; for
/// non-hex, non-binary literals an exponent (which must carry digits) and
/// an `f` suffix; for non-float literals a trailing run of `u`/`U`/`l`/`L`
/// size suffixes. A failure anywhere rejects the whole literal.
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

    let mut is_float = false;
    let mut is_hex = false;
    let mut is_binary = false;

    if p < input.len() {
        match input[p] {
            b'.' => {
                is_float = true;
                p += 1;
                while p < input.len() && input[p].is_ascii_digit() {
                    p += 1;
                }
            }
            b'x' | b'X' => {
                // hex formatted integer of the type 0xef80
                is_hex = true;
                p += 1;
                while p < input.len() && input[p].is_ascii_hexdigit() {
                    p += 1;
                }
            }
            b'b' | b'B' => {
                // binary formatted integer of the type 0b01011101
                is_binary = true;
                p += 1;
                while p < input.len() && (input[p] == b'0' || input[p] == b'1') {
                    p += 1;
                }
            }
            _ => {}
        }
    }

    if !is_hex && !is_binary {
        // floating point exponent
        if p < input.len() && (input[p] == b'e' || input[p] == b'E') {
            is_float = true;
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

        // single precision suffix
        if p < input.len() && input[p] == b'f' {
            p += 1;
        }
    }

    if !is_float {
        // integer size suffixes, any length, any order
        while p < input.len() && matches!(input[p], b'u' | b'U' | b'l' | b'L') {
            p += 1;
        }
    }

    Some(ScanMatch::to(p))
}

/// Recognize one punctuation character. The C-family set does not include
/// `#`; directive lines are the host's preprocessor classification.
pub fn scan_punctuation(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    match input.first() {
        Some(
            b'[' | b']' | b'{' | b'}' | b'!' | b'%' | b'^' | b'&' | b'*' | b'(' | b')' | b'-'
            | b'+' | b'=' | b'~' | b'|' | b'<' | b'>' | b'?' | b':' | b'/' | b';' | b',' | b'.',
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

    fn c_keywords() -> KeywordSet {
        KeywordSet::from_words(&["if", "while", "return"], true)
    }

    #[test]
    fn string_spans_escaped_quote() {
        // "abc\"def" is one ten-byte literal, not split at the escape
        let input = br#""abc\"def""#;
        let m = scan_string(input, &no_keywords()).unwrap();
        assert_eq!((m.start, m.end), (0, 10));
    }

    #[test]
    fn unterminated_string_fails() {
        assert!(scan_string(br#""abc"#, &no_keywords()).is_none());
        assert!(scan_string(br#""abc\"#, &no_keywords()).is_none());
    }

    #[test]
    fn string_requires_opening_quote() {
        assert!(scan_string(b"abc", &no_keywords()).is_none());
        assert!(scan_string(b"", &no_keywords()).is_none());
    }

    #[test]
    fn char_literal_plain_and_escaped() {
        let m = scan_char_literal(b"'a'", &no_keywords()).unwrap();
        assert_eq!(m.end, 3);
        let m = scan_char_literal(br"'\n'", &no_keywords()).unwrap();
        assert_eq!(m.end, 4);
    }

    #[test]
    fn char_literal_rejects_multi_char_and_unterminated() {
        assert!(scan_char_literal(b"'ab'", &no_keywords()).is_none());
        assert!(scan_char_literal(b"'a", &no_keywords()).is_none());
        assert!(scan_char_literal(b"''", &no_keywords()).is_none());
    }

    #[test]
    fn identifier_is_greedy() {
        let m = scan_identifier(b"_foo42 bar", &no_keywords()).unwrap();
        assert_eq!(m.end, 6);
        assert!(scan_identifier(b"9lives", &no_keywords()).is_none());
    }

    #[test]
    fn function_name_requires_call_parenthesis() {
        let m = scan_function_name(b"foo(", &c_keywords()).unwrap();
        assert_eq!((m.start, m.end), (0, 3));

        // blanks between name and parenthesis are not part of the token
        let m = scan_function_name(b"foo \t(x)", &c_keywords()).unwrap();
        assert_eq!((m.start, m.end), (0, 3));

        assert!(scan_function_name(b"foo ;", &c_keywords()).is_none());
    }

    #[test]
    fn function_name_rejects_keywords() {
        // `if (` must fall through to the plain identifier scanner
        assert!(scan_function_name(b"if(", &c_keywords()).is_none());
        assert!(scan_function_name(b"while (x)", &c_keywords()).is_none());
    }

    #[test]
    fn number_hex_with_suffix() {
        let m = scan_number(b"0x1Au", &no_keywords()).unwrap();
        assert_eq!(m.end, 5);
        let m = scan_number(b"0x1AuL", &no_keywords()).unwrap();
        assert_eq!(m.end, 6);
    }

    #[test]
    fn number_binary() {
        let m = scan_number(b"0b0101", &no_keywords()).unwrap();
        assert_eq!(m.end, 6);
        // binary run stops at the first non-binary digit
        let m = scan_number(b"0b012", &no_keywords()).unwrap();
        assert_eq!(m.end, 4);
    }

    #[test]
    fn number_float_exponent_and_suffix() {
        let m = scan_number(b"1.5e+10f", &no_keywords()).unwrap();
        assert_eq!(m.end, 8);
        let m = scan_number(b"3.", &no_keywords()).unwrap();
        assert_eq!(m.end, 2);
    }

    #[test]
    fn number_exponent_without_digits_rejects_whole_literal() {
        assert!(scan_number(b"1e", &no_keywords()).is_none());
        assert!(scan_number(b"1e+", &no_keywords()).is_none());
        assert!(scan_number(b"1E-;", &no_keywords()).is_none());
    }

    #[test]
    fn number_signed_and_suffix_runs() {
        let m = scan_number(b"-42", &no_keywords()).unwrap();
        assert_eq!(m.end, 3);
        // suffix characters are not validated for realism
        let m = scan_number(b"7uLLu", &no_keywords()).unwrap();
        assert_eq!(m.end, 5);
        // a lone sign with no digits anywhere fails
        assert!(scan_number(b"+", &no_keywords()).is_none());
        assert!(scan_number(b"-x", &no_keywords()).is_none());
    }

    #[test]
    fn float_literals_take_no_integer_suffix() {
        // the size-suffix run only applies to non-float literals
        let m = scan_number(b"1.0u", &no_keywords()).unwrap();
        assert_eq!(m.end, 3);
    }

    #[test]
    fn punctuation_is_single_character() {
        let m = scan_punctuation(b"{}", &no_keywords()).unwrap();
        assert_eq!(m.end, 1);
        assert!(scan_punctuation(b"#define", &no_keywords()).is_none());
        assert!(scan_punctuation(b"@", &no_keywords()).is_none());
    }
}
