//! Reading and writing `config.toml`
//!
//! Saves land in a temp file beside the target and are renamed over it, so
//! readers never see half a file. The file being replaced is first copied
//! to `config.toml.backup`.

use crate::error::join_errors;
use crate::{Config, ConfigError, ConfigResult, CONFIG_VERSION};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub(crate) struct ConfigPersistence {
    config_path: PathBuf,
}

impl ConfigPersistence {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn backup_path(&self) -> PathBuf {
        self.config_path.with_extension("toml.backup")
    }

    fn read_error(&self, source: io::Error) -> ConfigError {
        ConfigError::ReadError {
            path: self.config_path.clone(),
            source,
        }
    }

    /// Defaults when the file is absent; empty or malformed files are errors
    ///
    /// Out-of-range values and a foreign `version` are logged and kept, so
    /// hand edits survive until the user fixes them.
    pub fn load(&self) -> ConfigResult<Config> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No config at {}, using defaults",
                    self.config_path.display()
                );
                return Ok(Config::default());
            }
            Err(e) => return Err(self.read_error(e)),
        };

        if contents.trim().is_empty() {
            return Err(self.read_error(io::Error::new(
                io::ErrorKind::InvalidData,
                "config file is blank",
            )));
        }

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: self.config_path.clone(),
            source,
        })?;

        if config.version != CONFIG_VERSION {
            log::warn!(
                "Config file is version {}, this build writes version {}",
                config.version,
                CONFIG_VERSION
            );
        }
        if let Err(errors) = config.validate() {
            log::warn!("Config has invalid values: {}", join_errors(&errors));
        }

        Ok(config)
    }

    /// Rejects invalid configs before touching the disk
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config
            .validate()
            .map_err(|errors| ConfigError::ValidationError(join_errors(&errors)))?;

        let dir = self
            .config_path
            .parent()
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: format!("{} has no parent directory", self.config_path.display()),
            })?;
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::DirectoryCreationError {
                path: dir.to_path_buf(),
                source,
            })?;
            log::info!("Created config directory {}", dir.display());
        }

        if self.config_path.exists() {
            fs::copy(&self.config_path, self.backup_path())
                .map_err(|source| ConfigError::BackupError { source })?;
            log::debug!("Previous config kept at {}", self.backup_path().display());
        }

        let rendered = toml::to_string_pretty(config)?;
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(rendered.as_bytes())?;
        staged.flush()?;
        staged
            .persist(&self.config_path)
            .map_err(|e| ConfigError::WriteError {
                path: self.config_path.clone(),
                source: e.error,
            })?;

        log::info!("Config saved to {}", self.config_path.display());
        Ok(())
    }
}
