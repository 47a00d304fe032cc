//! Reserved-word sets with per-language case sensitivity
//!
//! The function-name scanner needs keyword membership to decide whether an
//! identifier followed by `(` is a call site or a control-flow keyword. The
//! set is passed to scanners explicitly so they stay pure and testable
//! instead of reaching into shared language state.
use std::collections::hash_set;
use std::collections::HashSet;

/// A language's reserved words. Case-insensitive sets store lowercased
/// spellings and fold queries before lookup.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    words: HashSet<String>,
    case_sensitive: bool,
}

impl KeywordSet {
    /// Create an empty set
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            words: HashSet::new(),
            case_sensitive,
        }
    }

    /// Create a set from a static word list
    pub fn from_words(words: &[&str], case_sensitive: bool) -> Self {
        let mut set = Self::new(case_sensitive);
        for word in words {
            set.insert(word);
        }
        set
    }

    /// Insert one reserved word
    pub fn insert(&mut self, word: &str) {
        if self.case_sensitive {
            self.words.insert(word.to_string());
        } else {
            self.words.insert(word.to_ascii_lowercase());
        }
    }

    /// Membership test honoring the set's case sensitivity
    pub fn contains(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_ascii_lowercase())
        }
    }

    /// Membership test for a raw byte spelling. Identifiers recognized by the
    /// scanners are always ASCII, so non-UTF-8 input simply fails the test.
    pub fn contains_bytes(&self, word: &[u8]) -> bool {
        std::str::from_utf8(word)
            .map(|s| self.contains(s))
            .unwrap_or(false)
    }

    /// Whether lookups fold case
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of reserved words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the stored spellings
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_sensitive_lookup_is_exact() {
        let set = KeywordSet::from_words(&["if", "while"], true);
        assert!(set.contains("if"));
        assert!(!set.contains("If"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn case_insensitive_lookup_folds_both_sides() {
        let set = KeywordSet::from_words(&["SELECT", "from"], false);
        assert!(set.contains("select"));
        assert!(set.contains("Select"));
        assert!(set.contains("FROM"));
        assert!(!set.contains("join"));
    }

    #[test]
    fn byte_lookup_matches_str_lookup() {
        let set = KeywordSet::from_words(&["return"], true);
        assert!(set.contains_bytes(b"return"));
        assert!(!set.contains_bytes(b"ret"));
        assert!(!set.contains_bytes(&[0xff, 0xfe]));
    }
}
