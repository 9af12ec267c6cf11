//! Configuration file support for the portfolio CLI.
//!
//! Loads optional `portfolio.toml` from the working directory, or the file
//! given with `--config`.

use std::path::{Path, PathBuf};

use portfolio_site::SiteOptions;
use portfolio_site::anchors::DEFAULT_EXTERNAL_ANCHORS;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "portfolio.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Document-level options passed to the renderer
    pub site: SiteOptions,
    pub build: BuildConfig,
    pub anchors: AnchorConfig,
}

/// Output settings for `portfolio build`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory the page is written into
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
        }
    }
}

/// Link audit settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Anchors that may be linked without a section emitting them.
    /// Example: `["contact"]`
    pub external: Vec<String>,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            external: DEFAULT_EXTERNAL_ANCHORS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl PortfolioConfig {
    /// Pick the explicit config if given, else look for `portfolio.toml` in `root`.
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_explicit(path),
            None => Ok(Self::load(root)),
        }
    }

    /// Load config from `portfolio.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_explicit(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from a path that must exist and parse.
    pub fn load_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
