use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file (relative to the working directory).
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Database connection parameters, as stored in `config.json`.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(rename = "SERVER_NAME")]
    pub server_name: String,
    #[serde(rename = "PORT")]
    pub port: u16,
    #[serde(rename = "USER_NAME")]
    pub user_name: String,
    #[serde(rename = "USER_PASSWORD")]
    pub user_password: String,
    #[serde(rename = "DATABASE_NAME")]
    pub database_name: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server_name", &self.server_name)
            .field("port", &self.port)
            .field("user_name", &self.user_name)
            .field("user_password", &"***")
            .field("database_name", &self.database_name)
            .finish()
    }
}

impl Config {
    /// Return the config path to use: the explicit one, or `config.json`.
    pub fn config_file(custom: Option<&Path>) -> PathBuf {
        custom
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from file.
    ///
    /// Unlike a missing optional setting, a missing or malformed file is an
    /// error: there is no sensible default for database credentials.
    pub fn load(path: &Path) -> AppResult<Self> {
        log::debug!("Reading configuration at path {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut cfg = Self::from_json(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        cfg.resolve_database_path(path.parent());
        log::trace!("Config: {:?}", cfg);
        Ok(cfg)
    }

    /// Decode the JSON body of a config file.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Relative database names are taken relative to the config file, so the
    /// tool finds the same database from any working directory.
    fn resolve_database_path(&mut self, base: Option<&Path>) {
        if self.database_name == crate::db::pool::IN_MEMORY {
            return;
        }

        let db = Path::new(&self.database_name);
        if db.is_absolute() {
            return;
        }

        if let Some(dir) = base.filter(|d| !d.as_os_str().is_empty()) {
            self.database_name = dir.join(db).to_string_lossy().to_string();
        }
    }
}
