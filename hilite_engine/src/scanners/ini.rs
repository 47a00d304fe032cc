//! INI key-name scanner
//!
//! INI files highlight the key to the left of `=` as a known identifier.
//! The scanner is the one recognizer that reports a sub-range: leading
//! blanks are skipped and trailing blanks before the `=` are trimmed out
//! of the match.
use super::{is_blank, ScanMatch};
use crate::keywords::KeywordSet;

/// Recognize an INI variable name: everything before the first `=`,
/// trimmed of surrounding blanks. Fails if there is no `=` on the rest of
/// the line or the trimmed name is empty.
pub fn scan_variable_name(input: &[u8], _keywords: &KeywordSet) -> Option<ScanMatch> {
    let mut p = 0;
    while p < input.len() && is_blank(input[p]) {
        p += 1;
    }

    let name_start = p;
    while p < input.len() && input[p] != b'=' && input[p] != b'\n' && input[p] != b'\r' {
        p += 1;
    }

    if p < input.len() && input[p] == b'=' {
        let mut name_end = p;
        while name_end > name_start && is_blank(input[name_end - 1]) {
            name_end -= 1;
        }

        if name_start < name_end {
            return Some(ScanMatch::new(name_start, name_end));
        }
    }

    None
}
