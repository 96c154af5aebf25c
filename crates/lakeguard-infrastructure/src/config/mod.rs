//! Configuration management
//!
//! Layered loading (defaults, TOML file, environment) with validation of
//! every compliance option before anything is evaluated.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig};
