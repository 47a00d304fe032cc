//! Hand-written character scanners and their dispatch pipelines
//!
//! Each scanner is a pure function that tries to recognize exactly one
//! lexical unit starting at the cursor. On success it reports the byte
//! range it consumed, relative to the cursor; on failure it consumes
//! nothing. Scanners never look behind the cursor and never read past the
//! end of the input slice.
//!
//! Priority order is data: a pipeline is an ordered slice of
//! [`ScannerRule`]s and the dispatcher stops at the first success.
use crate::keywords::KeywordSet;
use crate::palette::PaletteIndex;

pub mod c_style;
pub mod ini;
pub mod lua_style;

/// Byte range recognized by a scanner, relative to the cursor it was
/// invoked at. `start` is usually 0; the INI variable-name scanner reports
/// a trimmed sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch {
    /// First consumed byte, relative to the cursor
    pub start: usize,
    /// One past the last consumed byte, relative to the cursor
    pub end: usize,
}

impl ScanMatch {
    /// Create a new match
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "scanner matches are never empty");
        Self { start, end }
    }

    /// Match covering `[0, end)`
    pub fn to(end: usize) -> Self {
        Self::new(0, end)
    }

    /// Byte length of the match
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Matches are non-empty by construction
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Common try-scan signature. Every scanner receives the language's keyword
/// set; only the function-name scanner consults it.
pub type ScannerFn = fn(&[u8], &KeywordSet) -> Option<ScanMatch>;

/// One priority slot in a custom scanner pipeline: a scanner and the
/// palette category its matches receive.
#[derive(Debug, Clone, Copy)]
pub struct ScannerRule {
    pub scan: ScannerFn,
    pub kind: PaletteIndex,
}

/// Cascade for C-family languages (C, C++, Rust, JavaScript).
pub const C_STYLE_PIPELINE: &[ScannerRule] = &[
    ScannerRule {
        scan: c_style::scan_string,
        kind: PaletteIndex::String,
    },
    ScannerRule {
        scan: c_style::scan_char_literal,
        kind: PaletteIndex::CharLiteral,
    },
    ScannerRule {
        scan: c_style::scan_function_name,
        kind: PaletteIndex::KnownIdentifier,
    },
    ScannerRule {
        scan: c_style::scan_identifier,
        kind: PaletteIndex::Identifier,
    },
    ScannerRule {
        scan: c_style::scan_number,
        kind: PaletteIndex::Number,
    },
    ScannerRule {
        scan: c_style::scan_punctuation,
        kind: PaletteIndex::Punctuation,
    },
];

/// GML cascade: C-style without the character-literal scanner.
pub const GML_PIPELINE: &[ScannerRule] = &[
    ScannerRule {
        scan: c_style::scan_string,
        kind: PaletteIndex::String,
    },
    ScannerRule {
        scan: c_style::scan_function_name,
        kind: PaletteIndex::KnownIdentifier,
    },
    ScannerRule {
        scan: c_style::scan_identifier,
        kind: PaletteIndex::Identifier,
    },
    ScannerRule {
        scan: c_style::scan_number,
        kind: PaletteIndex::Number,
    },
    ScannerRule {
        scan: c_style::scan_punctuation,
        kind: PaletteIndex::Punctuation,
    },
];

/// Lua cascade. Lua has no call-site heuristic and no char literals; its
/// string scanner covers single quotes, double quotes, and long brackets.
pub const LUA_PIPELINE: &[ScannerRule] = &[
    ScannerRule {
        scan: lua_style::scan_string,
        kind: PaletteIndex::String,
    },
    ScannerRule {
        scan: lua_style::scan_identifier,
        kind: PaletteIndex::Identifier,
    },
    ScannerRule {
        scan: lua_style::scan_number,
        kind: PaletteIndex::Number,
    },
    ScannerRule {
        scan: lua_style::scan_punctuation,
        kind: PaletteIndex::Punctuation,
    },
];

/// INI cascade: key names (everything before `=`) highlight as known
/// identifiers; there is no number scanner.
pub const INI_PIPELINE: &[ScannerRule] = &[
    ScannerRule {
        scan: c_style::scan_string,
        kind: PaletteIndex::String,
    },
    ScannerRule {
        scan: c_style::scan_char_literal,
        kind: PaletteIndex::CharLiteral,
    },
    ScannerRule {
        scan: ini::scan_variable_name,
        kind: PaletteIndex::KnownIdentifier,
    },
    ScannerRule {
        scan: c_style::scan_identifier,
        kind: PaletteIndex::Identifier,
    },
    ScannerRule {
        scan: c_style::scan_punctuation,
        kind: PaletteIndex::Punctuation,
    },
];

/// Plain text recognizes nothing; the dispatcher's forced advance covers
/// every non-blank character with the default category.
pub const PLAIN_TEXT_PIPELINE: &[ScannerRule] = &[];

pub(crate) fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

pub(crate) fn is_identifier_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

pub(crate) fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}
