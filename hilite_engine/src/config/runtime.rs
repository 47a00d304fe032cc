// RUNTIME PREFERENCES (User Experience)

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerPreferences {
    /// Whether to gather per-kind token counters during full passes
    pub collect_metrics: bool,

    /// Whether to log each single-character fallback advance
    pub log_forced_advances: bool,
}

impl Default for TokenizerPreferences {
    fn default() -> Self {
        Self {
            collect_metrics: env::var(env_vars::TOKENIZER_COLLECT_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_forced_advances: env::var(env_vars::TOKENIZER_LOG_FORCED_ADVANCES)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to emit JSON log lines instead of plain text
    pub use_structured_logging: bool,

    /// Minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub tokenizer: TokenizerPreferences,
    pub logging: LoggingPreferences,
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Process-wide preferences, read from the environment on first access
pub fn preferences() -> &'static RuntimeConfig {
    static PREFERENCES: OnceLock<RuntimeConfig> = OnceLock::new();
    PREFERENCES.get_or_init(RuntimeConfig::default)
}

/// Environment variable names for configuration
pub mod env_vars {
    // Tokenizer
    pub const TOKENIZER_COLLECT_METRICS: &str = "HILITE_TOKENIZER_COLLECT_METRICS";
    pub const TOKENIZER_LOG_FORCED_ADVANCES: &str = "HILITE_TOKENIZER_LOG_FORCED_ADVANCES";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "HILITE_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "HILITE_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_preferences_are_memoized() {
        let first = preferences() as *const RuntimeConfig;
        let second = preferences() as *const RuntimeConfig;
        assert_eq!(first, second);
    }
}
