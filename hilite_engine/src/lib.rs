// Internal modules
pub mod config;
pub mod keywords;
pub mod language;
#[macro_use]
pub mod logging;
pub mod palette;
pub mod scanners;
pub mod span;
pub mod tokenizer;

// Re-export key types for library consumers
pub use keywords::KeywordSet;
pub use language::{Identifier, LanguageDefinition, PatternError, TokenPattern, TokenizeStrategy};
pub use palette::PaletteIndex;
pub use span::Span;
pub use tokenizer::{next_token, Token, TokenizeMetrics, Tokens};
