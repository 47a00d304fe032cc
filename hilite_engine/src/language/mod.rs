//! Language definitions: the immutable per-language configuration
//!
//! A [`LanguageDefinition`] bundles a language's keyword set, known
//! built-in identifiers, comment delimiters, and its tokenization
//! strategy. Definitions are constructed once by a registry and shared
//! read-only afterwards; nothing here mutates after construction.
use crate::keywords::KeywordSet;
use crate::palette::PaletteIndex;
use crate::scanners::ScannerRule;
use crate::{log_debug, log_warning};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A known built-in name with its tooltip description. The declaration has
/// no effect on tokenization; the host uses it for hover text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// The identifier spelling
    pub name: String,
    /// Human-readable description, e.g. "Built-in function"
    pub declaration: String,
}

impl Identifier {
    /// Create a known identifier with a description
    pub fn new(name: &str, declaration: &str) -> Self {
        Self {
            name: name.to_string(),
            declaration: declaration.to_string(),
        }
    }

    /// Create a known identifier with no description
    pub fn bare(name: &str) -> Self {
        Self::new(name, "")
    }
}

/// Pattern compilation errors for the declarative strategy
#[derive(Debug, Clone, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid token pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// One entry of an ordered declarative token list: a regex anchored at the
/// cursor and the palette category its matches receive.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    regex: Regex,
    /// Palette category for matches of this pattern
    pub kind: PaletteIndex,
    /// The pattern source as declared, for diagnostics
    pub source: &'static str,
}

impl TokenPattern {
    /// Compile a pattern. The regex is anchored so it can only match
    /// exactly at the cursor position.
    pub fn new(pattern: &'static str, kind: PaletteIndex) -> Result<Self, PatternError> {
        let anchored = format!("^(?:{pattern})");
        let regex = Regex::new(&anchored).map_err(|e| PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            regex,
            kind,
            source: pattern,
        })
    }

    /// Try to match at the start of `text`, returning the matched byte
    /// length. Zero-length matches are rejected to preserve the engine's
    /// progress guarantee.
    pub fn match_len(&self, text: &str) -> Option<usize> {
        match self.regex.find(text) {
            Some(m) if m.end() > 0 => Some(m.end()),
            _ => None,
        }
    }
}

/// How a language turns text into tokens: exactly one of a custom scanner
/// cascade or an ordered declarative pattern list.
#[derive(Debug, Clone)]
pub enum TokenizeStrategy {
    /// Hand-written scanner pipeline evaluated in priority order
    Scanners(&'static [ScannerRule]),
    /// Ordered (pattern, kind) list; first declared match wins
    Patterns(Vec<TokenPattern>),
}

/// Immutable per-language configuration.
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Human-readable language label (display only, never matched on)
    pub name: &'static str,
    /// Reserved words
    pub keywords: KeywordSet,
    /// Known built-in names, keyed by spelling
    pub identifiers: HashMap<String, Identifier>,
    /// Block comment opener; `None` when the language has no block comments
    pub comment_start: Option<&'static str>,
    /// Block comment closer
    pub comment_end: Option<&'static str>,
    /// Line comment marker; `None` when the language has no line comments
    pub single_line_comment: Option<&'static str>,
    /// Whether keyword/identifier matching is case sensitive
    pub case_sensitive: bool,
    /// Marker character of preprocessor-directive lines, if any
    pub preproc_char: Option<char>,
    /// The tokenization strategy
    pub strategy: TokenizeStrategy,
}

impl LanguageDefinition {
    /// Create a definition driven by a custom scanner pipeline. Comment
    /// delimiters default to the C family; builders override as needed.
    pub fn with_scanners(name: &'static str, pipeline: &'static [ScannerRule]) -> Self {
        Self {
            name,
            keywords: KeywordSet::new(true),
            identifiers: HashMap::new(),
            comment_start: Some("/*"),
            comment_end: Some("*/"),
            single_line_comment: Some("//"),
            case_sensitive: true,
            preproc_char: Some('#'),
            strategy: TokenizeStrategy::Scanners(pipeline),
        }
    }

    /// Create a definition driven by an ordered declarative pattern list.
    pub fn with_patterns(name: &'static str, patterns: Vec<TokenPattern>) -> Self {
        Self {
            name,
            keywords: KeywordSet::new(true),
            identifiers: HashMap::new(),
            comment_start: Some("/*"),
            comment_end: Some("*/"),
            single_line_comment: Some("//"),
            case_sensitive: true,
            preproc_char: Some('#'),
            strategy: TokenizeStrategy::Patterns(patterns),
        }
    }

    /// Replace the keyword set from a static word list, honoring the
    /// definition's case sensitivity.
    pub fn set_keywords(&mut self, words: &[&str]) {
        self.keywords = KeywordSet::from_words(words, self.case_sensitive);
    }

    /// Register known built-in names sharing one declaration string.
    pub fn set_identifiers(&mut self, names: &[&str], declaration: &str) {
        for name in names {
            self.identifiers
                .insert(name.to_string(), Identifier::new(name, declaration));
        }
    }

    /// Append declared patterns to a `Patterns` strategy. No-op for
    /// scanner-driven definitions.
    pub fn push_patterns(&mut self, declared: &[(&'static str, PaletteIndex)]) {
        if let TokenizeStrategy::Patterns(patterns) = &mut self.strategy {
            patterns.extend(compile_patterns(declared));
        }
    }
}

/// Compile an ordered declared list, keeping declaration order. An invalid
/// pattern is logged and skipped; language construction itself never fails.
pub fn compile_patterns(declared: &[(&'static str, PaletteIndex)]) -> Vec<TokenPattern> {
    let mut patterns = Vec::with_capacity(declared.len());
    for (pattern, kind) in declared {
        match TokenPattern::new(pattern, *kind) {
            Ok(compiled) => patterns.push(compiled),
            Err(error) => {
                log_warning!("Skipping invalid token pattern",
                    "pattern" => pattern,
                    "error" => error
                );
            }
        }
    }
    log_debug!("Compiled token pattern list",
        "declared" => declared.len(),
        "compiled" => patterns.len()
    );
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_are_anchored_at_the_cursor() {
        let pattern = TokenPattern::new(r"[0-9]+", PaletteIndex::Number).unwrap();
        assert_eq!(pattern.match_len("42abc"), Some(2));
        // a match further into the text is not a match at the cursor
        assert_eq!(pattern.match_len("abc42"), None);
    }

    #[test]
    fn zero_length_matches_are_rejected() {
        let pattern = TokenPattern::new(r"[0-9]*", PaletteIndex::Number).unwrap();
        assert_eq!(pattern.match_len("abc"), None);
        assert_eq!(pattern.match_len("7x"), Some(1));
    }

    #[test]
    fn invalid_pattern_is_skipped_not_fatal() {
        let compiled = compile_patterns(&[
            (r"[0-9]+", PaletteIndex::Number),
            (r"(unclosed", PaletteIndex::String),
            (r"[a-z]+", PaletteIndex::Identifier),
        ]);
        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].kind, PaletteIndex::Number);
        assert_eq!(compiled[1].kind, PaletteIndex::Identifier);
    }

    #[test]
    fn set_identifiers_keys_by_spelling() {
        let mut def =
            LanguageDefinition::with_scanners("Test", crate::scanners::PLAIN_TEXT_PIPELINE);
        def.set_identifiers(&["floor", "ceil"], "Built-in function");
        assert_eq!(def.identifiers.len(), 2);
        assert_eq!(def.identifiers["floor"].declaration, "Built-in function");
    }

    #[test]
    fn case_insensitive_definition_builds_folded_keywords() {
        let mut def =
            LanguageDefinition::with_scanners("Test", crate::scanners::PLAIN_TEXT_PIPELINE);
        def.case_sensitive = false;
        def.set_keywords(&["SELECT"]);
        assert!(def.keywords.contains("select"));
    }
}
