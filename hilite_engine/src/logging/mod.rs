//! Global logging for the tokenization engine
//!
//! Provides a thread-safe global logging service with a clean macro
//! interface. Tokenization itself never requires the logger; every macro
//! is a no-op until [`init_global_logging`] runs.

pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging from the runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    let logging_service = Arc::new(LoggingService::with_config());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    logging_service.log_debug("Global logging initialized");
    Ok(())
}

/// Initialize with a custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to the global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log_debug, log_error, log_info, log_warning};

    #[test]
    fn test_macros_are_safe_before_initialization() {
        // must not panic whether or not another test initialized logging
        log_error!("unreached logger");
        log_warning!("unreached logger", "key" => "value");
        log_info!("unreached logger", "count" => 3);
        log_debug!("unreached logger");
    }

    #[test]
    fn test_double_initialization_is_rejected() {
        let service = Arc::new(LoggingService::new(
            Arc::new(MemoryLogger::new()),
            LogLevel::Debug,
        ));
        let first = init_global_logging_with_service(service.clone());
        let second = init_global_logging_with_service(service);
        // exactly one of the two calls can claim the slot
        assert!(first.is_ok() != second.is_ok() || second.is_err());
        assert!(is_initialized());
    }
}
