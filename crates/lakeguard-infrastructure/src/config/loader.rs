//! Layered configuration loading
//!
//! Builds an [`AppConfig`] from built-in defaults, an optional `lakeguard.toml`
//! and `LAKEGUARD__` environment variables, then rejects it unless every
//! compliance option is usable by the evaluator.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lakeguard_domain::error::Result;
use lakeguard_validate::CheckRegistry;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where to read configuration from
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicit file; `None` searches the default locations
    config_path: Option<PathBuf>,

    /// Prefix before the first `__` of an override variable
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader searching the default locations with the `LAKEGUARD` prefix
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching; a missing file is not an error
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read overrides from `<prefix>__SECTION__KEY` instead
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Merge defaults, the file and the environment, later layers winning
    ///
    /// `LAKEGUARD__COMPLIANCE__MINIMUM_COMMENT_LENGTH=25` sets
    /// `compliance.minimum_comment_length`. Fails on out-of-range values,
    /// malformed critical patterns, unknown required checks or an unknown log
    /// level.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        let env_prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&env_prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        debug!(
            required_checks = app_config.compliance.comprehensive_required_checks.len(),
            "Configuration validated"
        );

        Ok(app_config)
    }

    /// Read every layer again
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Write `config` as TOML that [`ConfigLoader::load`] reads back unchanged
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        let path = path.as_ref();
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Explicit file, if one was set
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First of `./lakeguard.toml`, `./lakeguard/lakeguard.toml`, the user config
    /// dir and `~/.lakeguard/` that exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates
            .into_iter()
            .find(|path| !path.as_os_str().is_empty() && path.exists())
    }
}

/// Everything the evaluator would otherwise reject on first use
fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    config.check_context()?;
    CheckRegistry::standard().resolve_all(&config.compliance.comprehensive_required_checks)?;
    Ok(())
}
