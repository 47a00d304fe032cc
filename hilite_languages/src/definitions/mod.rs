//! Built-in language definition builders
//!
//! One builder per supported language. Builders are called once by the
//! registry and the results cached for the life of the process; each one
//! assembles keyword tables, known identifiers, comment delimiters and a
//! tokenization strategy. Languages cluster into three groups: custom
//! scanner pipelines, declarative pattern lists sharing the C-like rows
//! below, and the stylesheet pair with its own rows.

mod pattern_langs;
mod scanner_langs;
mod web;

pub use pattern_langs::{
    build_angel_script, build_cs, build_glsl, build_hlsl, build_json, build_python, build_sql,
};
pub use scanner_langs::{
    build_c, build_cpp, build_gml, build_ini, build_javascript, build_lua, build_plain_text,
    build_rust,
};
pub use web::{build_css, build_html};

use hilite_engine::PaletteIndex;

// Shared declarative rows for C-like pattern languages. Order matters;
// the engine takes the first row that matches at the cursor.
pub(crate) const PREPROCESSOR_ROW: &str = r"[ \t]*#[ \t]*[a-zA-Z_]+";
pub(crate) const WIDE_STRING_ROW: &str = r#"L?"(\\.|[^"])*""#;
pub(crate) const CHAR_LITERAL_ROW: &str = r"'\\?[^']'";
pub(crate) const FLOAT_ROW: &str = r"[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)([eE][+-]?[0-9]+)?[fF]?";
pub(crate) const INT_ROW: &str = r"[+-]?[0-9]+[Uu]?[lL]?[lL]?";
pub(crate) const OCTAL_ROW: &str = r"0[0-7]+[Uu]?[lL]?[lL]?";
pub(crate) const HEX_ROW: &str = r"0[xX][0-9a-fA-F]+[uU]?[lL]?[lL]?";
pub(crate) const IDENTIFIER_ROW: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";
pub(crate) const PUNCTUATION_ROW: &str =
    r"[\[\]\{\}\!\%\^\&\*\(\)\-\+\=\~\|\<\>\?\/\;\,\.]";
pub(crate) const PUNCTUATION_WITH_COLON_ROW: &str =
    r"[\[\]\{\}\!\%\^\&\*\(\)\-\+\=\~\|\<\>\?\/\;\,\.\:]";

/// The four numeric rows shared by every C-like pattern language, in
/// declaration order: float, decimal, octal, hex.
pub(crate) fn number_rows() -> Vec<(&'static str, PaletteIndex)> {
    vec![
        (FLOAT_ROW, PaletteIndex::Number),
        (INT_ROW, PaletteIndex::Number),
        (OCTAL_ROW, PaletteIndex::Number),
        (HEX_ROW, PaletteIndex::Number),
    ]
}
