//! Configuration management

mod schema;

pub use schema::{Config, UNPROCESSED_DIR};

use crate::error::ConfigError;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Config file looked up in the current directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "dictionary.json";

impl Config {
    /// Load, parse and validate the configuration at `path`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);

        let content =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::NotFound {
                path: config_path.clone(),
                source,
            })?;

        let config = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: config_path,
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration without touching the filesystem.
    ///
    /// `base_folder` has `~` and environment variables expanded.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut config: Config = serde_json::from_str(content)?;
        config.base_folder = expand_base_folder(
            &config.base_folder,
            dirs::home_dir().as_deref(),
            |name| std::env::var(name).ok(),
        );
        Ok(config)
    }

    /// Check that every folder the run depends on exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, rule) in self.matches.iter().enumerate() {
            if rule.short_word.is_empty() {
                return Err(ConfigError::EmptyKeyword { index: index + 1 });
            }
        }

        let unprocessed = self.unprocessed_folder();
        if !unprocessed.is_dir() {
            return Err(ConfigError::MissingUnprocessed(unprocessed));
        }

        for rule in &self.matches {
            let destination = self.destination_folder(rule);
            if !destination.is_dir() {
                return Err(ConfigError::MissingDestination {
                    keyword: rule.short_word.clone(),
                    path: destination,
                });
            }
        }

        Ok(())
    }

    /// `dictionary.json` in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }
}

/// `$VAR` or `${VAR}`
static VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([^}]+)\}|([A-Za-z_][A-Za-z0-9_]*))").expect("invalid variable regex")
});

/// Expand environment variables, then a leading `~`, in the base folder.
///
/// Unknown variables are left as written. Without a home directory `~` is kept.
fn expand_base_folder(
    base_folder: &Path,
    home: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    let raw = base_folder.to_string_lossy();
    let substituted = VAR_RE.replace_all(&raw, |caps: &Captures| {
        let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        lookup(name).unwrap_or_else(|| caps[0].to_string())
    });
    let folder = PathBuf::from(substituted.as_ref());

    match (home, folder.strip_prefix("~")) {
        (Some(home), Ok(rest)) if rest.as_os_str().is_empty() => home.to_path_buf(),
        // Keep the trailing separator of "~/Scans/" style folders
        (Some(home), Ok(_)) => home.join(&substituted[2..]),
        _ => folder,
    }
}
