//! Layered configuration builder.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;
use crate::path::Location;

/// Builds a [`Config`] from every configured source.
///
/// Precedence, lowest to highest: defaults, user config, project
/// `webpath.yaml`, an explicit config file, environment, programmatic.
///
/// # Examples
///
/// ```
/// use webpath::config::{Config, ConfigBuilder};
///
/// let location = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         cwd: Some("/app".into()),
///         origin: None,
///     })
///     .build_location()
///     .unwrap();
///
/// assert_eq!(location.cwd(), "/app");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// A builder using every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start project config discovery from (default: process cwd).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml` instead of `~/.webpath`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// An explicit YAML file, layered above discovered files.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Skip user and project file discovery. An explicit file is still read.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `WEBPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            for source in ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())? {
                log::debug!("applying config from {}", source.path.display());
                config.merge(source.config);
            }
        }

        if let Some(path) = &self.config_file {
            log::debug!("applying config from {}", path.display());
            config.merge(ConfigLoader::load_file(path)?);
        }

        if !self.skip_env {
            config.merge(EnvironmentConfig::load());
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// [`build`](Self::build) and convert to a [`Location`].
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn build_location(self) -> Result<Location> {
        Ok(self.build()?.to_location())
    }
}
