//! Locating, loading and saving `config.toml`, plus environment overrides

use crate::app_config::LogLevel;
use crate::error::join_errors;
use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "JAIGURUDEV";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Entry point for everything that touches the config file
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the platform config directory
    ///
    /// - Linux: `~/.config/jaigurudev/`
    /// - macOS: `~/Library/Application Support/jaigurudev/`
    /// - Windows: `%APPDATA%\jaigurudev\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Uses `config_dir` instead of the platform directory (tests, `--config-dir`)
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        if config_dir.as_os_str().is_empty() {
            return Err(ConfigError::PathResolutionError {
                reason: "Config directory path is empty".to_string(),
            });
        }

        let persistence = ConfigPersistence::new(config_dir.join(CONFIG_FILE_NAME));
        Ok(Self {
            persistence,
            config_dir,
        })
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "jaigurudev")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: "no home directory for this user".to_string(),
            })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of `config.toml`
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Path of the backup kept from the previous save
    pub fn backup_path(&self) -> PathBuf {
        self.persistence.backup_path()
    }

    /// Loads the configuration, returning defaults when the file is missing
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Like [`ConfigManager::load`], but any failure is logged and replaced by defaults
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config: {}", e);
            Config::default()
        })
    }

    /// Validates and atomically writes the configuration
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Read-modify-write of the file on disk
    ///
    /// ```rust,no_run
    /// # use jaigurudev_config::ConfigManager;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let manager = ConfigManager::new()?;
    /// manager.update(|config| {
    ///     config.catalog.popular_limit = 20;
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Writes a default config file if none exists
    ///
    /// Returns `Ok(true)` when a file was created.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.save(&Config::default())?;
        log::info!("Generated default config at {}", self.config_path().display());
        Ok(true)
    }

    /// Overwrites the config file with defaults
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Validates the config file on disk
    ///
    /// Returns the list of problems found; empty means valid.
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let config = self.load()?;

        match config.validate() {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.iter().map(|e| e.to_string()).collect()),
        }
    }

    /// Loads the config and applies `JAIGURUDEV_SECTION_FIELD` overrides
    ///
    /// Recognised variables: `JAIGURUDEV_APP_LOG_LEVEL`,
    /// `JAIGURUDEV_CATALOG_POPULAR_LIMIT`, `JAIGURUDEV_CATALOG_RECENT_LIMIT`,
    /// `JAIGURUDEV_CATALOG_TRENDING_LIMIT` and
    /// `JAIGURUDEV_CATALOG_RECOMMENDED_LIMIT`. A value that does not parse
    /// is an error.
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;

        if let Err(errors) = config.validate() {
            log::warn!(
                "Config validation warnings after env overrides: {}",
                join_errors(&errors)
            );
        }

        Ok(config)
    }
}

/// Applies overrides read through `lookup`
///
/// Split out from [`ConfigManager::load_with_env_overrides`] so tests can
/// supply variables without touching the process environment.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| {
        let name = format!("{}_{}", ENV_PREFIX, suffix);
        lookup(&name).map(|value| (name, value))
    };

    if let Some((name, value)) = var("APP_LOG_LEVEL") {
        config.app.log_level = value
            .parse::<LogLevel>()
            .map_err(|reason| ConfigError::EnvOverrideError {
                variable: name.clone(),
                value: value.clone(),
                reason,
            })?;
        log::info!("Log level override from {}: {}", name, config.app.log_level);
    }

    let limits: [(&str, &mut usize); 4] = [
        ("CATALOG_POPULAR_LIMIT", &mut config.catalog.popular_limit),
        ("CATALOG_RECENT_LIMIT", &mut config.catalog.recent_limit),
        ("CATALOG_TRENDING_LIMIT", &mut config.catalog.trending_limit),
        (
            "CATALOG_RECOMMENDED_LIMIT",
            &mut config.catalog.recommended_limit,
        ),
    ];

    for (suffix, slot) in limits {
        if let Some((name, value)) = var(suffix) {
            *slot = value
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::EnvOverrideError {
                    variable: name.clone(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            log::info!("Limit override from {}: {}", name, slot);
        }
    }

    Ok(())
}
