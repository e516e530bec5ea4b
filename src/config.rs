//! Asset server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "plugin/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built plugin bundle (`trunk build` output).
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8080
    /// - `PLUGIN_DIST_DIR`: default `plugin/dist`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` does not parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("PLUGIN_DIST_DIR").ok().as_deref(),
        )
    }

    /// Build config from raw values; blank values use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `port` is non-blank and not a valid port number.
    pub fn from_values(port: Option<&str>, dist_dir: Option<&str>) -> Result<Self, ConfigError> {
        let port = match non_blank(port) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let dist_dir = PathBuf::from(non_blank(dist_dir).unwrap_or(DEFAULT_DIST_DIR));
        Ok(Self { port, dist_dir })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
