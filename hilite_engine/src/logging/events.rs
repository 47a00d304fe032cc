//! Event types for engine logging

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl LogEvent {
    fn new(level: LogLevel, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Create a new error event
    pub fn error(message: &str) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// Create a new warning event
    pub fn warning(message: &str) -> Self {
        Self::new(LogLevel::Warning, message)
    }

    /// Create a new info event
    pub fn info(message: &str) -> Self {
        Self::new(LogLevel::Info, message)
    }

    /// Create a new debug event
    pub fn debug(message: &str) -> Self {
        Self::new(LogLevel::Debug, message)
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    /// Format for console display
    pub fn format(&self) -> String {
        let mut output = format!(
            "[{}] [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level.as_str(),
            self.message
        );
        if !self.context.is_empty() {
            let mut pairs: Vec<String> = self
                .context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            pairs.sort();
            output.push_str(&format!(" ({})", pairs.join(", ")));
        }
        output
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "message": self.message,
        });

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation_and_context() {
        let event = LogEvent::error("scan failed")
            .with_context("language", "Lua")
            .with_context("position", "42");

        assert!(event.is_error());
        assert_eq!(event.message, "scan failed");
        assert_eq!(event.context.get("language"), Some(&"Lua".to_string()));
        assert_eq!(event.context.get("position"), Some(&"42".to_string()));
    }

    #[test]
    fn test_event_formatting() {
        let event = LogEvent::warning("pattern skipped").with_context("pattern", "(bad");
        let formatted = event.format();

        assert!(formatted.contains("[WARN]"));
        assert!(formatted.contains("pattern skipped"));
        assert!(formatted.contains("pattern=(bad"));
    }

    #[test]
    fn test_json_formatting() {
        let event = LogEvent::info("language built").with_context("name", "Python");
        let json = event.format_json().unwrap();

        assert!(json.contains("\"level\":\"INFO\""));
        assert!(json.contains("\"message\":\"language built\""));
        assert!(json.contains("\"name\":\"Python\""));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}
