//! File-extension to language mapping
//!
//! The built-in table mirrors what the editor front ends expect; users can
//! extend or override it with a small TOML file:
//!
//! ```toml
//! [extensions]
//! vue = "HTML"
//! pgsql = "SQL"
//! ```

use crate::registry::LanguageId;
use hilite_engine::log_info;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Errors loading an extension override file
#[derive(Debug, thiserror::Error)]
pub enum ExtensionMapError {
    #[error("Failed to read extension map: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse extension map: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Extension map entry '{extension}' names unknown language '{name}'")]
    UnknownLanguage { extension: String, name: String },
}

#[derive(Debug, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    extensions: HashMap<String, String>,
}

/// Maps file extensions (without the leading dot) to languages.
#[derive(Debug, Clone)]
pub struct ExtensionMap {
    overrides: HashMap<String, LanguageId>,
}

impl ExtensionMap {
    /// The built-in mapping with no user overrides.
    pub fn builtin() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Built-in mapping plus overrides parsed from a TOML file.
    pub fn with_overrides_from(path: &Path) -> Result<Self, ExtensionMapError> {
        let raw = std::fs::read_to_string(path)?;
        let parsed: OverrideFile = toml::from_str(&raw)?;

        let mut overrides = HashMap::new();
        for (extension, name) in parsed.extensions {
            let id = LanguageId::from_name(&name).ok_or_else(|| {
                ExtensionMapError::UnknownLanguage {
                    extension: extension.clone(),
                    name: name.clone(),
                }
            })?;
            overrides.insert(extension.to_lowercase(), id);
        }

        log_info!("Loaded extension overrides",
            "path" => path.display(),
            "entries" => overrides.len()
        );
        Ok(Self { overrides })
    }

    /// Language for an extension without the leading dot. Unknown
    /// extensions map to plain text.
    pub fn resolve(&self, extension: &str) -> LanguageId {
        let extension = extension.to_lowercase();
        if let Some(&id) = self.overrides.get(&extension) {
            return id;
        }
        builtin_language_for(&extension)
    }

    /// Language for a file path, from its extension.
    pub fn resolve_path(&self, path: &Path) -> LanguageId {
        match path.extension().and_then(|e| e.to_str()) {
            Some(extension) => self.resolve(extension),
            None => LanguageId::PlainText,
        }
    }
}

impl Default for ExtensionMap {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_language_for(extension: &str) -> LanguageId {
    match extension {
        "cpp" | "hpp" | "h" => LanguageId::Cpp,
        "c" => LanguageId::C,
        "cs" => LanguageId::CSharp,
        "hlsl" => LanguageId::Hlsl,
        "glsl" | "shader" | "vert" | "frag" => LanguageId::Glsl,
        "py" => LanguageId::Python,
        "lua" => LanguageId::Lua,
        "rs" => LanguageId::Rust,
        "js" | "ts" => LanguageId::JavaScript,
        "json" => LanguageId::Json,
        "ini" => LanguageId::Ini,
        "html" => LanguageId::Html,
        "css" => LanguageId::Css,
        "gml" => LanguageId::Gml,
        "sql" => LanguageId::Sql,
        "as" => LanguageId::AngelScript,
        _ => LanguageId::PlainText,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builtin_mapping_covers_editor_extensions() {
        let map = ExtensionMap::builtin();
        assert_eq!(map.resolve("cpp"), LanguageId::Cpp);
        assert_eq!(map.resolve("h"), LanguageId::Cpp);
        assert_eq!(map.resolve("rs"), LanguageId::Rust);
        assert_eq!(map.resolve("ts"), LanguageId::JavaScript);
        assert_eq!(map.resolve("vert"), LanguageId::Glsl);
        assert_eq!(map.resolve("unknown"), LanguageId::PlainText);
    }

    #[test]
    fn resolution_ignores_extension_case() {
        let map = ExtensionMap::builtin();
        assert_eq!(map.resolve("CPP"), LanguageId::Cpp);
        assert_eq!(map.resolve("Json"), LanguageId::Json);
    }

    #[test]
    fn paths_resolve_through_their_extension() {
        let map = ExtensionMap::builtin();
        assert_eq!(
            map.resolve_path(&PathBuf::from("src/main.rs")),
            LanguageId::Rust
        );
        assert_eq!(
            map.resolve_path(&PathBuf::from("Makefile")),
            LanguageId::PlainText
        );
    }

    #[test]
    fn overrides_win_over_builtin_entries() {
        let mut overrides = HashMap::new();
        overrides.insert("h".to_string(), LanguageId::C);
        let map = ExtensionMap { overrides };
        assert_eq!(map.resolve("h"), LanguageId::C);
        assert_eq!(map.resolve("cpp"), LanguageId::Cpp);
    }

    #[test]
    fn override_file_parses_and_validates_names() {
        let parsed: OverrideFile = toml::from_str("[extensions]\nvue = \"HTML\"\n").unwrap();
        assert_eq!(parsed.extensions["vue"], "HTML");
        assert_eq!(LanguageId::from_name(&parsed.extensions["vue"]), Some(LanguageId::Html));
        assert_eq!(LanguageId::from_name("NotALanguage"), None);
    }
}
