//! SQLite connection handle (lightweight for CLI usage).

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

/// Database name that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Connection parameters taken from the config file.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings<'a> {
    pub server: &'a str,
    pub port: u16,
    pub user: &'a str,
    pub password: &'a str,
    pub database: &'a str,
}

impl<'a> ConnectionSettings<'a> {
    pub fn from_config(cfg: &'a Config) -> Self {
        Self {
            server: &cfg.server_name,
            port: cfg.port,
            user: &cfg.user_name,
            password: &cfg.user_password,
            database: &cfg.database_name,
        }
    }

    /// Full connection string, credentials in clear text.
    ///
    /// The embedded SQLite engine only needs `database`, so nothing in the
    /// CLI opens a connection from this string; it is the form a networked
    /// driver would take. Never log it: use `redacted_connection_string`.
    pub fn connection_string(&self) -> String {
        self.format_with_password(self.password)
    }

    /// Connection string safe to write into logs.
    pub fn redacted_connection_string(&self) -> String {
        self.format_with_password("***")
    }

    fn format_with_password(&self, password: &str) -> String {
        format!(
            "server={};user id={};password={};port={};database={};",
            self.server, self.user, password, self.port, self.database
        )
    }
}

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database named in the config and check that it answers.
    pub fn connect(cfg: &Config) -> AppResult<Self> {
        let settings = ConnectionSettings::from_config(cfg);
        log::debug!("Connecting with {}", settings.redacted_connection_string());

        let pool = Self::open(settings.database)?;
        pool.ping()?;
        log::trace!("Connection to SQLite DB successful");
        Ok(pool)
    }

    pub fn open(database: &str) -> AppResult<Self> {
        let conn = if database == IN_MEMORY {
            Connection::open_in_memory()
        } else {
            Connection::open(Path::new(database))
        }
        .map_err(AppError::Connection)?;
        Ok(Self { conn })
    }

    /// Liveness check: a trivial round trip through the engine.
    pub fn ping(&self) -> AppResult<()> {
        self.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(AppError::Connection)?;
        Ok(())
    }
}
