//! Engine configuration
//!
//! Runtime preferences are read once from environment variables and
//! shared for the life of the process.

pub mod runtime;

pub use runtime::{preferences, LoggingPreferences, RuntimeConfig, TokenizerPreferences};
