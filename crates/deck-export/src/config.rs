//! Build settings from `decksmith.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// File name looked up next to the project file.
pub const CONFIG_FILE_NAME: &str = "decksmith.toml";

pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// How the generated project is compiled.
///
/// The compiler is invoked as
/// `<compiler> <args...> <module>.csproj -c <configuration> -o <output>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub compiler: String,
    pub args: Vec<String>,
    pub configuration: String,
    pub timeout_secs: u64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: "dotnet".to_string(),
            args: vec!["build".to_string()],
            configuration: "Release".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BuildConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| ExportError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load `decksmith.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no build config, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(&path)?;
        tracing::info!(path = %path.display(), compiler = %config.compiler, "loaded build config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: BuildConfig = toml::from_str("timeout_secs = 30\n").unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.compiler, "dotnet");
        assert_eq!(config.args, vec!["build".to_string()]);
        assert_eq!(config.configuration, "Release");
    }

    #[test]
    fn test_unknown_types_rejected() {
        assert!(toml::from_str::<BuildConfig>("timeout_secs = \"soon\"\n").is_err());
    }
}
