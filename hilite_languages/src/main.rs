use hilite_engine::{
    logging, LanguageDefinition, PaletteIndex, Span, Token, TokenizeMetrics, Tokens,
};
use hilite_languages::{definition, ExtensionMap, LanguageId};
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input-file> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let input_path = Path::new(&args[1]);
    let options = parse_cli_options(&args[2..]);

    if !input_path.is_file() {
        eprintln!("Error: Input must be an existing file");
        eprintln!("  File: {}", input_path.display());
        std::process::exit(1);
    }

    process_file(input_path, &options)
}

fn print_help(program_name: &str) {
    println!("Hilite v{}", env!("CARGO_PKG_VERSION"));
    println!("Lexical syntax highlighter with per-language tokenization");
    println!();
    println!("USAGE:");
    println!(
        "    {} <input-file> [options]         # Highlight a file",
        program_name
    );
    println!();
    println!("ARGUMENTS:");
    println!("    <input-file>   Path to the source file to tokenize");
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --language NAME     Override language detection (see LANGUAGES)");
    println!("    --extensions FILE   Load extension-to-language overrides from a TOML file");
    println!("    --json              Emit the token stream as JSON instead of colored text");
    println!("    --stats             Print tokenization statistics after the output");
    println!("    --no-color          Disable ANSI colors in text output");
    println!();
    println!("OUTPUT:");
    println!("    Default: the file contents with ANSI colors applied per token category");
    println!("    --json:  one object with the resolved language and the token list");
    println!();
    println!("EXAMPLES:");
    println!(
        "    {} shader.hlsl                     # Detect language from extension",
        program_name
    );
    println!(
        "    {} build.txt --language lua        # Force a language",
        program_name
    );
    println!(
        "    {} main.cpp --json --stats         # Machine-readable tokens plus metrics",
        program_name
    );
    println!();
    println!("LANGUAGES:");
    for id in LanguageId::ALL {
        println!("    {}", id.as_str());
    }
}

struct CliOptions {
    language: Option<LanguageId>,
    extensions_file: Option<String>,
    json: bool,
    stats: bool,
    color: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            language: None,
            extensions_file: None,
            json: false,
            stats: false,
            color: true,
        }
    }
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--language" => {
                if i + 1 < args.len() {
                    if let Some(id) = LanguageId::from_name(&args[i + 1]) {
                        options.language = Some(id);
                    } else {
                        eprintln!(
                            "Warning: Unknown language '{}', falling back to detection",
                            args[i + 1]
                        );
                    }
                    i += 1; // Skip the name argument
                } else {
                    eprintln!("Warning: --language requires a name");
                }
            }
            "--extensions" => {
                if i + 1 < args.len() {
                    options.extensions_file = Some(args[i + 1].clone());
                    i += 1; // Skip the path argument
                } else {
                    eprintln!("Warning: --extensions requires a file path");
                }
            }
            "--json" => {
                options.json = true;
            }
            "--stats" => {
                options.stats = true;
            }
            "--no-color" => {
                options.color = false;
            }
            _ => {
                eprintln!("Warning: Unknown option '{}'", args[i]);
            }
        }
        i += 1;
    }

    options
}

fn process_file(path: &Path, options: &CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;

    let language = match options.language {
        Some(id) => id,
        None => {
            let map = match &options.extensions_file {
                Some(file) => match ExtensionMap::with_overrides_from(Path::new(file)) {
                    Ok(map) => map,
                    Err(error) => {
                        eprintln!("Error: Failed to load extension overrides: {}", error);
                        std::process::exit(1);
                    }
                },
                None => ExtensionMap::builtin(),
            };
            map.resolve_path(path)
        }
    };

    let def = definition(language);
    let (tokens, metrics) = tokenize_lines(def, &source);

    if options.json {
        print_json(language, &tokens)?;
    } else {
        print_highlighted(&source, &tokens, options.color);
    }

    if options.stats {
        println!();
        println!("Tokenization Summary:");
        println!("  Language: {}", language);
        println!("  Tokens emitted: {}", metrics.tokens_emitted);
        println!("  Bytes covered: {}", metrics.bytes_covered);
        println!("  Forced advances: {}", metrics.forced_advances);
        let mut by_kind: Vec<(&String, &usize)> = metrics.counts_by_kind.iter().collect();
        by_kind.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (kind, count) in by_kind {
            println!("    {}: {}", kind, count);
        }
    }

    Ok(())
}

// Tokenize one line at a time so line-oriented constructs (strings,
// comments, INI keys) never run across a newline, then shift spans back to
// whole-file offsets.
fn tokenize_lines(def: &LanguageDefinition, source: &str) -> (Vec<Token>, TokenizeMetrics) {
    let mut tokens = Vec::new();
    let mut metrics = TokenizeMetrics::new();
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        let mut stream = Tokens::new(def, content);
        for token in stream.by_ref() {
            tokens.push(Token::new(
                Span::new(offset + token.span.start, offset + token.span.end),
                token.kind,
            ));
        }
        metrics.merge(stream.into_metrics());
        offset += line.len();
    }

    (tokens, metrics)
}

fn print_json(language: LanguageId, tokens: &[Token]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<serde_json::Value> = tokens
        .iter()
        .map(|token| {
            serde_json::json!({
                "start": token.span.start,
                "end": token.span.end,
                "kind": token.kind.as_str(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "language": language.as_str(),
        "tokens": entries,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_highlighted(source: &str, tokens: &[Token], color: bool) {
    let mut cursor = 0;
    for token in tokens {
        // Blanks between tokens carry no category, print them as-is
        if token.span.start > cursor {
            print!("{}", &source[cursor..token.span.start]);
        }
        let text = &source[token.span.start..token.span.end];
        if color {
            print!("{}{}\x1b[0m", ansi_color(token.kind), text);
        } else {
            print!("{}", text);
        }
        cursor = token.span.end;
    }
    if cursor < source.len() {
        print!("{}", &source[cursor..]);
    }
}

fn ansi_color(kind: PaletteIndex) -> &'static str {
    match kind {
        PaletteIndex::Keyword => "\x1b[34m",
        PaletteIndex::Number => "\x1b[33m",
        PaletteIndex::String => "\x1b[32m",
        PaletteIndex::CharLiteral => "\x1b[32m",
        PaletteIndex::Punctuation => "\x1b[37m",
        PaletteIndex::Preprocessor => "\x1b[35m",
        PaletteIndex::Identifier => "\x1b[36m",
        PaletteIndex::KnownIdentifier => "\x1b[96m",
        PaletteIndex::PreprocIdentifier => "\x1b[95m",
        PaletteIndex::Comment => "\x1b[90m",
        PaletteIndex::MultiLineComment => "\x1b[90m",
        _ => "\x1b[0m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_options() {
        let args = vec![
            "--language".to_string(),
            "lua".to_string(),
            "--json".to_string(),
            "--no-color".to_string(),
        ];

        let options = parse_cli_options(&args);
        assert_eq!(options.language, Some(LanguageId::Lua));
        assert!(options.json);
        assert!(!options.color);
        assert!(!options.stats);
    }

    #[test]
    fn test_parse_cli_options_invalid() {
        let args = vec![
            "--language".to_string(),
            "cobol".to_string(),
            "--unknown-option".to_string(),
        ];

        let options = parse_cli_options(&args);
        // Unknown language falls back to extension detection
        assert_eq!(options.language, None);
    }

    #[test]
    fn test_parse_cli_options_extensions_file() {
        let args = vec!["--extensions".to_string(), "map.toml".to_string()];

        let options = parse_cli_options(&args);
        assert_eq!(options.extensions_file.as_deref(), Some("map.toml"));
    }

    #[test]
    fn test_tokenize_lines_offsets_and_line_isolation() {
        let def = definition(LanguageId::Cpp);
        // the unterminated string on line one must not swallow line two
        let (tokens, metrics) = tokenize_lines(def, "\"open\nint x;\n");
        assert!(tokens
            .iter()
            .any(|t| t.kind == PaletteIndex::Identifier && t.span == Span::new(6, 9)));
        assert!(tokens.iter().all(|t| t.span.end <= 12));
        assert_eq!(metrics.tokens_emitted, tokens.len());
    }

    #[test]
    fn test_ansi_color_overlay_categories_reset() {
        assert_eq!(ansi_color(PaletteIndex::Default), "\x1b[0m");
        assert_eq!(ansi_color(PaletteIndex::Background), "\x1b[0m");
        assert_ne!(ansi_color(PaletteIndex::Keyword), "\x1b[0m");
    }
}
