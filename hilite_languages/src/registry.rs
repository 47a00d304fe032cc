//! Language registry: stable identifiers and construct-once definitions

use crate::definitions;
use hilite_engine::log_debug;
use hilite_engine::LanguageDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Stable identifier for every built-in language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageId {
    Cpp,
    C,
    CSharp,
    Hlsl,
    Glsl,
    Python,
    Lua,
    Rust,
    JavaScript,
    Json,
    Ini,
    Html,
    Css,
    Gml,
    Sql,
    AngelScript,
    PlainText,
}

impl LanguageId {
    /// Every built-in language, in display order
    pub const ALL: [LanguageId; 17] = [
        LanguageId::Cpp,
        LanguageId::C,
        LanguageId::CSharp,
        LanguageId::Hlsl,
        LanguageId::Glsl,
        LanguageId::Python,
        LanguageId::Lua,
        LanguageId::Rust,
        LanguageId::JavaScript,
        LanguageId::Json,
        LanguageId::Ini,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Gml,
        LanguageId::Sql,
        LanguageId::AngelScript,
        LanguageId::PlainText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Cpp => "C++",
            LanguageId::C => "C",
            LanguageId::CSharp => "C#",
            LanguageId::Hlsl => "HLSL",
            LanguageId::Glsl => "GLSL",
            LanguageId::Python => "Python",
            LanguageId::Lua => "Lua",
            LanguageId::Rust => "Rust",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Json => "Json",
            LanguageId::Ini => "Ini",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Gml => "GML",
            LanguageId::Sql => "SQL",
            LanguageId::AngelScript => "AngelScript",
            LanguageId::PlainText => "Text",
        }
    }

    /// Look up a language by display name or common alias, ignoring case.
    pub fn from_name(name: &str) -> Option<LanguageId> {
        match name.to_lowercase().as_str() {
            "c++" | "cpp" => Some(LanguageId::Cpp),
            "c" => Some(LanguageId::C),
            "c#" | "cs" | "csharp" => Some(LanguageId::CSharp),
            "hlsl" => Some(LanguageId::Hlsl),
            "glsl" => Some(LanguageId::Glsl),
            "python" | "py" => Some(LanguageId::Python),
            "lua" => Some(LanguageId::Lua),
            "rust" | "rs" => Some(LanguageId::Rust),
            "javascript" | "js" => Some(LanguageId::JavaScript),
            "json" => Some(LanguageId::Json),
            "ini" => Some(LanguageId::Ini),
            "html" => Some(LanguageId::Html),
            "css" => Some(LanguageId::Css),
            "gml" => Some(LanguageId::Gml),
            "sql" => Some(LanguageId::Sql),
            "angelscript" => Some(LanguageId::AngelScript),
            "text" | "plain" | "plaintext" => Some(LanguageId::PlainText),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! cached_definition {
    ($builder:expr) => {{
        static DEF: OnceLock<LanguageDefinition> = OnceLock::new();
        DEF.get_or_init(|| {
            let def = $builder();
            log_debug!("Built language definition",
                "language" => def.name,
                "keywords" => def.keywords.len(),
                "identifiers" => def.identifiers.len()
            );
            def
        })
    }};
}

/// The shared definition for a language. Construction happens on first
/// request; later requests for the same language get the same reference.
pub fn definition(id: LanguageId) -> &'static LanguageDefinition {
    match id {
        LanguageId::Cpp => cached_definition!(definitions::build_cpp),
        LanguageId::C => cached_definition!(definitions::build_c),
        LanguageId::CSharp => cached_definition!(definitions::build_cs),
        LanguageId::Hlsl => cached_definition!(definitions::build_hlsl),
        LanguageId::Glsl => cached_definition!(definitions::build_glsl),
        LanguageId::Python => cached_definition!(definitions::build_python),
        LanguageId::Lua => cached_definition!(definitions::build_lua),
        LanguageId::Rust => cached_definition!(definitions::build_rust),
        LanguageId::JavaScript => cached_definition!(definitions::build_javascript),
        LanguageId::Json => cached_definition!(definitions::build_json),
        LanguageId::Ini => cached_definition!(definitions::build_ini),
        LanguageId::Html => cached_definition!(definitions::build_html),
        LanguageId::Css => cached_definition!(definitions::build_css),
        LanguageId::Gml => cached_definition!(definitions::build_gml),
        LanguageId::Sql => cached_definition!(definitions::build_sql),
        LanguageId::AngelScript => cached_definition!(definitions::build_angel_script),
        LanguageId::PlainText => cached_definition!(definitions::build_plain_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilite_engine::{next_token, PaletteIndex, Span, TokenizeStrategy, Tokens};

    #[test]
    fn definitions_are_memoized() {
        let first = definition(LanguageId::Lua) as *const LanguageDefinition;
        let second = definition(LanguageId::Lua) as *const LanguageDefinition;
        assert_eq!(first, second);
    }

    #[test]
    fn every_language_builds() {
        for id in LanguageId::ALL {
            let def = definition(id);
            assert_eq!(def.name, id.as_str());
        }
    }

    #[test]
    fn name_round_trips_through_lookup() {
        for id in LanguageId::ALL {
            assert_eq!(LanguageId::from_name(id.as_str()), Some(id));
        }
        assert_eq!(LanguageId::from_name("nonesuch"), None);
    }

    #[test]
    fn sql_keywords_ignore_case() {
        let def = definition(LanguageId::Sql);
        assert!(!def.case_sensitive);
        assert!(def.keywords.contains("select"));
        assert!(def.keywords.contains("SELECT"));
    }

    #[test]
    fn json_booleans_are_keywords() {
        let def = definition(LanguageId::Json);
        let token = next_token(def, "true,", 0);
        assert_eq!(token.span, Span::new(0, 4));
        assert_eq!(token.kind, PaletteIndex::Keyword);
    }

    #[test]
    fn html_keeps_css_rows_and_adds_tags() {
        let css = definition(LanguageId::Css);
        let html = definition(LanguageId::Html);
        assert!(html.keywords.contains("div"));
        assert!(html.keywords.contains("border-color"));
        let (TokenizeStrategy::Patterns(css_rows), TokenizeStrategy::Patterns(html_rows)) =
            (&css.strategy, &html.strategy)
        else {
            panic!("stylesheet languages use pattern lists");
        };
        assert!(html_rows.len() > css_rows.len());
    }

    #[test]
    fn plain_text_emits_single_char_tokens() {
        let def = definition(LanguageId::PlainText);
        let tokens: Vec<_> = Tokens::new(def, "hi").collect();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == PaletteIndex::Default));
    }

    #[test]
    fn css_hex_color_is_a_number() {
        let def = definition(LanguageId::Css);
        let token = next_token(def, "#fff;", 0);
        assert_eq!(token.span, Span::new(0, 4));
        assert_eq!(token.kind, PaletteIndex::Number);
    }

    #[test]
    fn ini_variable_name_covers_trimmed_range() {
        let def = definition(LanguageId::Ini);
        let token = next_token(def, "  timeout  = 30", 0);
        assert_eq!(token.span, Span::new(2, 9));
        assert_eq!(token.kind, PaletteIndex::KnownIdentifier);
    }

    #[test]
    fn lua_long_bracket_string_scans_whole_literal() {
        let def = definition(LanguageId::Lua);
        let token = next_token(def, "[[multi ]line]] rest", 0);
        assert_eq!(token.span, Span::new(0, 15));
        assert_eq!(token.kind, PaletteIndex::String);
    }

    #[test]
    fn gml_strings_skip_char_literals() {
        // GML has no char-literal scanner, so a quote form falls through
        let def = definition(LanguageId::Gml);
        let token = next_token(def, "'a'", 0);
        assert_eq!(token.kind, PaletteIndex::Default);
        assert_eq!(token.span, Span::new(0, 1));
    }

    #[test]
    fn python_prefixed_string_is_one_token() {
        let def = definition(LanguageId::Python);
        let token = next_token(def, "f\"x {y}\" + 1", 0);
        assert_eq!(token.span, Span::new(0, 8));
        assert_eq!(token.kind, PaletteIndex::String);
    }

    #[test]
    fn hlsl_preprocessor_row_wins_over_punctuation() {
        let def = definition(LanguageId::Hlsl);
        let token = next_token(def, "#include <x>", 0);
        assert_eq!(token.kind, PaletteIndex::Preprocessor);
        assert_eq!(token.span, Span::new(0, 8));
    }
}
