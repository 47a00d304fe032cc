//! Token production: the strategy-dispatching tokenizer loop
//!
//! [`next_token`] produces exactly one token at or after a cursor
//! position, consulting the language's strategy. The [`Tokens`] iterator
//! wraps it into a full pass over a buffer and gathers [`TokenizeMetrics`]
//! along the way.
//!
//! The tokenizer guarantees forward progress: when nothing recognizes the
//! text at the cursor it emits a single-character `Default` token rather
//! than stalling, so a full pass always terminates.
use crate::config;
use crate::language::{LanguageDefinition, TokenizeStrategy};
use crate::log_debug;
use crate::palette::PaletteIndex;
use crate::scanners::is_blank;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// === TOKEN ===

/// One classified region of the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Half-open byte range within the buffer
    pub span: Span,
    /// Palette category of the region
    pub kind: PaletteIndex,
}

impl Token {
    pub fn new(span: Span, kind: PaletteIndex) -> Self {
        Self { span, kind }
    }

    /// End-of-input sentinel at the given buffer length.
    pub fn end_of_input(buffer_len: usize) -> Self {
        Self {
            span: Span::empty(buffer_len),
            kind: PaletteIndex::Default,
        }
    }

    /// An empty span marks the end-of-input sentinel; every real token
    /// covers at least one byte.
    pub fn is_end_of_input(&self) -> bool {
        self.span.is_empty()
    }
}

// === DISPATCHER ===

/// Byte width of the UTF-8 sequence starting at `bytes[0]`, clamped to the
/// remaining input so a truncated trailing sequence still advances.
fn utf8_width(bytes: &[u8]) -> usize {
    let lead = bytes[0];
    let width = if lead < 0x80 {
        1
    } else if lead >= 0xF0 {
        4
    } else if lead >= 0xE0 {
        3
    } else if lead >= 0xC0 {
        2
    } else {
        // continuation byte reached directly, step over it alone
        1
    };
    width.min(bytes.len())
}

/// Produce the next token of `source` at or after byte offset `cursor`.
///
/// Spaces and tabs before the token are skipped and belong to no token.
/// At end of input this returns the sentinel token with an empty span.
/// When neither the scanner pipeline nor the pattern list recognizes the
/// text, one character is consumed as `Default` so the caller always
/// advances.
pub fn next_token(definition: &LanguageDefinition, source: &str, cursor: usize) -> Token {
    let bytes = source.as_bytes();
    let mut pos = cursor.min(bytes.len());
    while pos < bytes.len() && is_blank(bytes[pos]) {
        pos += 1;
    }
    if pos >= bytes.len() {
        return Token::end_of_input(bytes.len());
    }

    match &definition.strategy {
        TokenizeStrategy::Scanners(pipeline) => {
            let rest = &bytes[pos..];
            for rule in pipeline.iter() {
                if let Some(found) = (rule.scan)(rest, &definition.keywords) {
                    return Token::new(
                        Span::new(pos + found.start, pos + found.end),
                        rule.kind,
                    );
                }
            }
        }
        TokenizeStrategy::Patterns(patterns) => {
            let rest = &source[pos..];
            for pattern in patterns.iter() {
                if let Some(len) = pattern.match_len(rest) {
                    return Token::new(Span::new(pos, pos + len), pattern.kind);
                }
            }
        }
    }

    // Nothing matched, fall back to a single-character Default token.
    let width = utf8_width(&bytes[pos..]);
    Token::new(Span::new(pos, pos + width), PaletteIndex::Default)
}

// === METRICS ===

/// Aggregate counters for one tokenization pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizeMetrics {
    /// Real tokens emitted (the sentinel is not counted)
    pub tokens_emitted: usize,
    /// Bytes covered by emitted tokens
    pub bytes_covered: usize,
    /// Tokens produced by the single-character fallback
    pub forced_advances: usize,
    /// Emitted token counts per palette category name
    pub counts_by_kind: HashMap<String, usize>,
}

impl TokenizeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_token(&mut self, token: &Token) {
        if token.is_end_of_input() {
            return;
        }
        self.tokens_emitted += 1;
        self.bytes_covered += token.span.len();
        *self
            .counts_by_kind
            .entry(token.kind.as_str().to_string())
            .or_insert(0) += 1;
    }

    pub fn record_forced_advance(&mut self) {
        self.forced_advances += 1;
    }

    /// Fold another pass's counters into this one, for callers that
    /// tokenize a buffer in pieces.
    pub fn merge(&mut self, other: TokenizeMetrics) {
        self.tokens_emitted += other.tokens_emitted;
        self.bytes_covered += other.bytes_covered;
        self.forced_advances += other.forced_advances;
        for (kind, count) in other.counts_by_kind {
            *self.counts_by_kind.entry(kind).or_insert(0) += count;
        }
    }
}

// === ITERATION ===

/// Iterator over the tokens of a buffer. Stops before the end-of-input
/// sentinel; callers needing the sentinel use [`next_token`] directly.
pub struct Tokens<'a> {
    definition: &'a LanguageDefinition,
    source: &'a str,
    cursor: usize,
    metrics: TokenizeMetrics,
}

impl<'a> Tokens<'a> {
    pub fn new(definition: &'a LanguageDefinition, source: &'a str) -> Self {
        Self {
            definition,
            source,
            cursor: 0,
            metrics: TokenizeMetrics::new(),
        }
    }

    /// Counters gathered so far; complete once iteration has finished.
    pub fn metrics(&self) -> &TokenizeMetrics {
        &self.metrics
    }

    /// Drain the iterator and return the pass counters.
    pub fn into_metrics(mut self) -> TokenizeMetrics {
        for _ in self.by_ref() {}
        self.metrics
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = next_token(self.definition, self.source, self.cursor);
        if token.is_end_of_input() {
            self.cursor = token.span.end;
            return None;
        }
        self.cursor = token.span.end;
        let prefs = &config::preferences().tokenizer;
        if prefs.collect_metrics {
            self.metrics.record_token(&token);
            if token.kind == PaletteIndex::Default {
                self.metrics.record_forced_advance();
            }
        }
        if token.kind == PaletteIndex::Default && prefs.log_forced_advances {
            log_debug!("Forced single-character advance",
                "position" => token.span.start
            );
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{compile_patterns, LanguageDefinition};
    use crate::scanners::{C_STYLE_PIPELINE, PLAIN_TEXT_PIPELINE};

    fn c_style() -> LanguageDefinition {
        let mut def = LanguageDefinition::with_scanners("Test", C_STYLE_PIPELINE);
        def.set_keywords(&["if", "return", "int"]);
        def
    }

    #[test]
    fn sentinel_has_empty_span_at_buffer_end() {
        let def = c_style();
        let token = next_token(&def, "   ", 0);
        assert!(token.is_end_of_input());
        assert_eq!(token.span, Span::empty(3));
        assert_eq!(token.kind, PaletteIndex::Default);
    }

    #[test]
    fn blanks_before_a_token_belong_to_no_token() {
        let def = c_style();
        let token = next_token(&def, " \t 42", 0);
        assert_eq!(token.span, Span::new(3, 5));
        assert_eq!(token.kind, PaletteIndex::Number);
    }

    #[test]
    fn unrecognized_byte_forces_single_char_advance() {
        let def = c_style();
        let token = next_token(&def, "@foo", 0);
        assert_eq!(token.span, Span::new(0, 1));
        assert_eq!(token.kind, PaletteIndex::Default);
    }

    #[test]
    fn unrecognized_multibyte_char_advances_whole_char() {
        let def = c_style();
        // U+00E9 is two bytes; the fallback must not split it
        let token = next_token(&def, "\u{e9}x", 0);
        assert_eq!(token.span, Span::new(0, 2));
        assert_eq!(token.kind, PaletteIndex::Default);
    }

    #[test]
    fn function_name_heuristic_runs_before_plain_identifier() {
        let def = c_style();
        let token = next_token(&def, "foo(1)", 0);
        assert_eq!(token.span, Span::new(0, 3));
        assert_eq!(token.kind, PaletteIndex::KnownIdentifier);

        // a keyword before a parenthesis is a plain identifier token
        let token = next_token(&def, "if (x)", 0);
        assert_eq!(token.span, Span::new(0, 2));
        assert_eq!(token.kind, PaletteIndex::Identifier);
    }

    #[test]
    fn full_pass_covers_every_non_blank_byte_exactly_once() {
        let def = c_style();
        let source = "int x = foo(0x1Au) + 'a'; // @";
        let mut covered = vec![false; source.len()];
        let mut cursor = 0usize;
        loop {
            let token = next_token(&def, source, cursor);
            if token.is_end_of_input() {
                break;
            }
            assert!(token.span.start >= cursor, "token may not move backwards");
            for flag in &mut covered[token.span.start..token.span.end] {
                assert!(!*flag, "byte covered twice");
                *flag = true;
            }
            cursor = token.span.end;
        }
        for (i, byte) in source.bytes().enumerate() {
            if byte != b' ' && byte != b'\t' {
                assert!(covered[i], "byte {i} ({:?}) never covered", byte as char);
            }
        }
    }

    #[test]
    fn tokenization_is_deterministic() {
        let def = c_style();
        let source = "return foo(42) + \"str\" @@";
        let first: Vec<Token> = Tokens::new(&def, source).collect();
        let second: Vec<Token> = Tokens::new(&def, source).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn pattern_order_breaks_ties_by_declaration() {
        let mut def = LanguageDefinition::with_patterns(
            "Test",
            compile_patterns(&[
                (r"[a-z]{2}", PaletteIndex::Keyword),
                (r"[a-z]+", PaletteIndex::Identifier),
            ]),
        );
        def.set_keywords(&[]);
        // both patterns match; the first declared one wins even though the
        // second matches more text
        let token = next_token(&def, "abcd", 0);
        assert_eq!(token.span, Span::new(0, 2));
        assert_eq!(token.kind, PaletteIndex::Keyword);
    }

    #[test]
    fn pattern_language_falls_back_on_no_match() {
        let def = LanguageDefinition::with_patterns(
            "Test",
            compile_patterns(&[(r"[0-9]+", PaletteIndex::Number)]),
        );
        let token = next_token(&def, "?1", 0);
        assert_eq!(token.span, Span::new(0, 1));
        assert_eq!(token.kind, PaletteIndex::Default);
        let token = next_token(&def, "?1", 1);
        assert_eq!(token.kind, PaletteIndex::Number);
    }

    #[test]
    fn empty_pipeline_emits_only_default_tokens() {
        let def = LanguageDefinition::with_scanners("Plain", PLAIN_TEXT_PIPELINE);
        let tokens: Vec<Token> = Tokens::new(&def, "ab").collect();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == PaletteIndex::Default));
    }

    #[test]
    fn metrics_count_tokens_and_forced_advances() {
        let def = c_style();
        let mut tokens = Tokens::new(&def, "x + @");
        while tokens.next().is_some() {}
        let metrics = tokens.metrics();
        assert_eq!(metrics.tokens_emitted, 3);
        assert_eq!(metrics.forced_advances, 1);
        assert_eq!(metrics.counts_by_kind["identifier"], 1);
        assert_eq!(metrics.counts_by_kind["punctuation"], 1);
    }

    #[test]
    fn metrics_merge_sums_counters() {
        let def = c_style();
        let mut total = Tokens::new(&def, "x = 1").into_metrics();
        total.merge(Tokens::new(&def, "y + @").into_metrics());
        assert_eq!(total.tokens_emitted, 6);
        assert_eq!(total.forced_advances, 1);
        assert_eq!(total.counts_by_kind["identifier"], 2);
    }

    #[test]
    fn cursor_past_end_yields_sentinel_at_buffer_len() {
        let def = c_style();
        let token = next_token(&def, "ab", 10);
        assert!(token.is_end_of_input());
        assert_eq!(token.span.start, 2);
    }
}
