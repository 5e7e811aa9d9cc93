use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");
const DEFAULT_CONFIG_PATH: &str = "src/default_config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub page: PageConfig,
}

/// Where static assets come from and where the built site goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            public_dir: PathBuf::from("public"),
        }
    }
}

/// The single page generated on build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub content: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content/index.md"),
            template: PathBuf::from("template.html"),
            output: PathBuf::from("public/index.html"),
        }
    }
}

impl Config {
    /// The config shipped in `src/default_config.toml`.
    ///
    /// build.rs checks the file's layout, so this only fails if the two
    /// drift apart.
    pub fn compiled_default() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::compiled_default();
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
