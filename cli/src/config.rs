use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct WfarConfig {
    pub log: Option<LogConfig>,
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitsConfig {
    /// Certificates whose acceptance table is larger are not verified.
    pub max_accept_entries: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl WfarConfig {
    /// Load from `explicit` if given, otherwise from the default location.
    ///
    /// A missing default file yields `Ok(None)`; a missing explicit file is
    /// an error.
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content, path).map(Some)
    }

    fn parse(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path, source })
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log
            .as_ref()
            .map_or("info", |log| log.level.as_str())
    }

    #[must_use]
    pub fn max_accept_entries(&self) -> Option<usize> {
        self.limits.as_ref().and_then(|limits| limits.max_accept_entries)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".wfar").join("config.toml"))
}
