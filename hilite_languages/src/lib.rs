// Internal modules
pub mod definitions;
pub mod extensions;
pub mod registry;

// Re-export key types for library consumers
pub use extensions::{ExtensionMap, ExtensionMapError};
pub use registry::{definition, LanguageId};
