//! Configuration
//!
//! [`EditorConfig`] and its sections, loaded by [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_config};
pub use types::{EditorConfig, HistoryConfig, LoggingConfig, ValidationSettings};
