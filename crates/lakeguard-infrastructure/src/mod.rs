//! Infrastructure layer for Lakeguard
//!
//! Loads the application configuration and sets up structured logging:
//!
//! - [`config`]: `AppConfig` and the layered [`ConfigLoader`]
//! - [`logging`]: `tracing` subscriber setup
//! - [`error_ext`]: context helpers for foreign errors
//!
//! # Example
//!
//! ```no_run
//! use lakeguard_infrastructure::{ConfigLoader, init_logging};
//!
//! let config = ConfigLoader::new().with_config_path("lakeguard.toml").load()?;
//! init_logging(&config.logging)?;
//! let evaluator = config.evaluator()?;
//! # let _ = evaluator;
//! # Ok::<(), lakeguard_domain::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use logging::init_logging;
