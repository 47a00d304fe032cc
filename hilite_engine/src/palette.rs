//! Palette categories shared between the tokenizer and the editor host
//!
//! The tokenizer only ever produces the lexical subset of these values.
//! The overlay group (`Background` onward) exists so the host can index a
//! single color table for both token coloring and editor chrome.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highlight category assigned to a token, and index into the host's color
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaletteIndex {
    /// Fallback category; also the kind of the end-of-input sentinel and of
    /// forced single-character advances
    Default,
    /// Reserved word of the language
    Keyword,
    /// Numeric literal (decimal, float, hex, binary, with suffixes)
    Number,
    /// Quoted string literal
    String,
    /// Single-quoted character literal
    CharLiteral,
    /// Single punctuation character
    Punctuation,
    /// Preprocessor directive
    Preprocessor,
    /// Plain identifier
    Identifier,
    /// Identifier recognized as a call site, or a known built-in name
    KnownIdentifier,
    /// Identifier inside a preprocessor directive
    PreprocIdentifier,
    /// Single-line comment
    Comment,
    /// Block comment
    MultiLineComment,

    // === OVERLAY CATEGORIES (host-produced, never emitted by the tokenizer) ===
    Background,
    Cursor,
    Selection,
    ErrorMarker,
    ControlCharacter,
    Breakpoint,
    LineNumber,
    CurrentLineFill,
    CurrentLineFillInactive,
    CurrentLineEdge,
}

impl PaletteIndex {
    /// All palette categories, in palette-table order. A palette consumer
    /// must supply a color for each of these.
    pub const ALL: [PaletteIndex; 22] = [
        Self::Default,
        Self::Keyword,
        Self::Number,
        Self::String,
        Self::CharLiteral,
        Self::Punctuation,
        Self::Preprocessor,
        Self::Identifier,
        Self::KnownIdentifier,
        Self::PreprocIdentifier,
        Self::Comment,
        Self::MultiLineComment,
        Self::Background,
        Self::Cursor,
        Self::Selection,
        Self::ErrorMarker,
        Self::ControlCharacter,
        Self::Breakpoint,
        Self::LineNumber,
        Self::CurrentLineFill,
        Self::CurrentLineFillInactive,
        Self::CurrentLineEdge,
    ];

    /// Display name for diagnostics and JSON output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::String => "string",
            Self::CharLiteral => "char_literal",
            Self::Punctuation => "punctuation",
            Self::Preprocessor => "preprocessor",
            Self::Identifier => "identifier",
            Self::KnownIdentifier => "known_identifier",
            Self::PreprocIdentifier => "preproc_identifier",
            Self::Comment => "comment",
            Self::MultiLineComment => "multiline_comment",
            Self::Background => "background",
            Self::Cursor => "cursor",
            Self::Selection => "selection",
            Self::ErrorMarker => "error_marker",
            Self::ControlCharacter => "control_character",
            Self::Breakpoint => "breakpoint",
            Self::LineNumber => "line_number",
            Self::CurrentLineFill => "current_line_fill",
            Self::CurrentLineFillInactive => "current_line_fill_inactive",
            Self::CurrentLineEdge => "current_line_edge",
        }
    }

    /// Check whether this category can be produced by the tokenizer itself.
    /// Overlay categories are owned by the editor host.
    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            Self::Default
                | Self::Keyword
                | Self::Number
                | Self::String
                | Self::CharLiteral
                | Self::Punctuation
                | Self::Preprocessor
                | Self::Identifier
                | Self::KnownIdentifier
                | Self::PreprocIdentifier
                | Self::Comment
                | Self::MultiLineComment
        )
    }
}

impl fmt::Display for PaletteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
